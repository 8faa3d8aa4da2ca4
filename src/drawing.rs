//! Content-stream operation helpers shared by the drawing stages
//!
//! Geometry arrives in millimetres with the origin at the top-left
//! corner of the page and y increasing downward; every helper converts
//! to PDF points in the backend's bottom-left coordinate space.

use crate::constants::mm_to_pt;
use crate::error::{Result, TemplateError};
use crate::style::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use tracing::{debug, trace};

/// Mapper from engine coordinates to PDF user space
#[derive(Debug, Clone, Copy)]
pub struct PageSpace {
    height: f32,
}

impl PageSpace {
    /// Create a mapper for a page of the given height in millimetres
    pub fn new(paper_height_mm: f32) -> Self {
        Self {
            height: paper_height_mm,
        }
    }

    /// Horizontal position in points
    pub fn x(&self, x_mm: f32) -> f32 {
        mm_to_pt(x_mm)
    }

    /// Vertical position in points, flipped to the PDF bottom-left origin
    pub fn y(&self, y_mm: f32) -> f32 {
        mm_to_pt(self.height - y_mm)
    }
}

/// Push the graphics state
pub fn save_state() -> Operation {
    Operation::new("q", vec![])
}

/// Pop the graphics state, restoring color, width, cap and dash
pub fn restore_state() -> Operation {
    Operation::new("Q", vec![])
}

/// Set stroke color and width, with an alpha state for translucent colors
pub fn set_stroke_style(color: Color, width_mm: f32) -> Vec<Operation> {
    let mut ops = vec![Operation::new(
        "RG",
        vec![color.r.into(), color.g.into(), color.b.into()],
    )];
    if let Some(op) = alpha_state(color) {
        ops.push(op);
    }
    ops.push(Operation::new("w", vec![mm_to_pt(width_mm).into()]));
    ops
}

/// Set the fill color, with an alpha state for translucent colors
pub fn set_fill_style(color: Color) -> Vec<Operation> {
    let mut ops = vec![Operation::new(
        "rg",
        vec![color.r.into(), color.g.into(), color.b.into()],
    )];
    if let Some(op) = alpha_state(color) {
        ops.push(op);
    }
    ops
}

/// Round line caps turn the zero-length dash segments into dots
pub fn round_line_cap() -> Operation {
    Operation::new("J", vec![1.into()])
}

/// Set a dash pattern; lengths are in points
pub fn dash_pattern(lengths_pt: &[f32], phase: f32) -> Operation {
    let array: Vec<Object> = lengths_pt.iter().map(|&length| length.into()).collect();
    Operation::new("d", vec![Object::Array(array), phase.into()])
}

/// Fill a rectangle given by its top-left corner and size in millimetres
pub fn fill_rect(space: &PageSpace, x: f32, y: f32, width: f32, height: f32) -> Vec<Operation> {
    vec![
        Operation::new(
            "re",
            vec![
                space.x(x).into(),
                space.y(y + height).into(),
                mm_to_pt(width).into(),
                mm_to_pt(height).into(),
            ],
        ),
        Operation::new("f", vec![]),
    ]
}

/// Stroke a horizontal line
pub fn horizontal_line(space: &PageSpace, start_x: f32, end_x: f32, y: f32) -> Vec<Operation> {
    vec![
        Operation::new("m", vec![space.x(start_x).into(), space.y(y).into()]),
        Operation::new("l", vec![space.x(end_x).into(), space.y(y).into()]),
        Operation::new("S", vec![]),
    ]
}

/// Stroke a vertical line
pub fn vertical_line(space: &PageSpace, x: f32, start_y: f32, end_y: f32) -> Vec<Operation> {
    vec![
        Operation::new("m", vec![space.x(x).into(), space.y(start_y).into()]),
        Operation::new("l", vec![space.x(x).into(), space.y(end_y).into()]),
        Operation::new("S", vec![]),
    ]
}

/// Resource name of the alpha graphics state for a byte alpha level
fn alpha_state_name(level: u8) -> String {
    format!("GA{level}")
}

fn alpha_byte(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Operation selecting the alpha graphics state of a translucent color
///
/// Returns None for opaque colors so fully opaque pages reference no
/// graphics states at all.
pub fn alpha_state(color: Color) -> Option<Operation> {
    if color.is_opaque() {
        return None;
    }
    let name = alpha_state_name(alpha_byte(color.a));
    Some(Operation::new("gs", vec![Object::Name(name.into_bytes())]))
}

/// Register ExtGState entries for every translucent color on the page
///
/// Generated content references alpha states by name; they must exist
/// in the page resources before a viewer renders the content.
pub fn register_alpha_states(
    doc: &mut Document,
    page_id: ObjectId,
    colors: &[Color],
) -> Result<()> {
    let mut levels: Vec<u8> = colors
        .iter()
        .filter(|color| !color.is_opaque())
        .map(|color| alpha_byte(color.a))
        .collect();
    levels.sort_unstable();
    levels.dedup();
    if levels.is_empty() {
        return Ok(());
    }
    debug!(
        "Registering {} alpha states on page {:?}",
        levels.len(),
        page_id
    );

    let states: Vec<(String, Dictionary)> = levels
        .iter()
        .map(|&level| {
            let alpha = level as f32 / 255.0;
            (
                alpha_state_name(level),
                dictionary! { "Type" => "ExtGState", "ca" => alpha, "CA" => alpha },
            )
        })
        .collect();

    // Resources may live inline in the page dictionary or behind a reference
    let resources_ref = {
        let page = match doc.get_object(page_id) {
            Ok(Object::Dictionary(dict)) => dict,
            _ => return Err(TemplateError::PageNotFound(page_id)),
        };
        match page.get(b"Resources") {
            Ok(Object::Reference(id)) => Some(*id),
            _ => None,
        }
    };

    match resources_ref {
        Some(resources_id) => {
            if let Ok(Object::Dictionary(resources)) = doc.get_object_mut(resources_id) {
                merge_alpha_states(resources, states);
            }
        }
        None => {
            if let Ok(Object::Dictionary(page)) = doc.get_object_mut(page_id) {
                if !page.has(b"Resources") {
                    page.set("Resources", Object::Dictionary(Dictionary::new()));
                }
                if let Ok(Object::Dictionary(resources)) = page.get_mut(b"Resources") {
                    merge_alpha_states(resources, states);
                }
            }
        }
    }

    Ok(())
}

fn merge_alpha_states(resources: &mut Dictionary, states: Vec<(String, Dictionary)>) {
    if !resources.has(b"ExtGState") {
        resources.set("ExtGState", Object::Dictionary(Dictionary::new()));
    }
    match resources.get_mut(b"ExtGState") {
        Ok(Object::Dictionary(ext_g_state)) => {
            for (name, state) in states {
                ext_g_state.set(name, Object::Dictionary(state));
            }
        }
        _ => debug!("ExtGState entry is not an inline dictionary, alpha states skipped"),
    }
}

/// Encode operations and append them to the page content
pub fn add_operations_to_page(
    doc: &mut Document,
    page_id: ObjectId,
    operations: Vec<Operation>,
) -> Result<()> {
    debug!(
        "Adding {} operations to page {:?}",
        operations.len(),
        page_id
    );
    trace!("Operations: {:?}", operations);

    let content = Content { operations };
    let content_bytes = content.encode()?;
    doc.add_page_contents(page_id, content_bytes)?;

    Ok(())
}
