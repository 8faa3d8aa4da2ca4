//! Base pattern selection and drawing

use crate::constants::{DOT_ON_LENGTH, mm_to_pt};
use crate::drawing::{self, PageSpace};
use crate::error::{Result, TemplateError};
use crate::mesh::Mesh;
use crate::template::{Margins, PageTemplate};
use lopdf::content::Operation;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// The base pattern drawn over the printable area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Horizontal and vertical lines at every mesh coordinate
    Grid,
    /// Dots at grid intersections, rendered as dashed horizontal lines
    Dotted,
    /// Horizontal lines only
    Ruled,
    /// No base pattern
    Blank,
}

impl Pattern {
    /// The lowercase selector for this pattern
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Dotted => "dotted",
            Self::Ruled => "ruled",
            Self::Blank => "blank",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "grid" => Ok(Self::Grid),
            "dotted" => Ok(Self::Dotted),
            "ruled" => Ok(Self::Ruled),
            "blank" => Ok(Self::Blank),
            other => Err(TemplateError::ConfigError(format!(
                "unknown pattern kind: {other:?}"
            ))),
        }
    }
}

/// Generate the drawing operations for the template's base pattern
pub fn generate_pattern_operations(template: &PageTemplate, mesh: &Mesh) -> Vec<Operation> {
    let operations = match template.pattern {
        Pattern::Grid => grid_operations(template, mesh),
        Pattern::Dotted => dotted_operations(template, mesh),
        Pattern::Ruled => ruled_operations(template, mesh),
        Pattern::Blank => Vec::new(),
    };
    trace!(
        "Generated {} operations for {} pattern",
        operations.len(),
        template.pattern
    );
    operations
}

fn grid_operations(template: &PageTemplate, mesh: &Mesh) -> Vec<Operation> {
    let space = PageSpace::new(template.paper_height);
    let mut ops = vec![drawing::save_state()];
    ops.extend(drawing::set_stroke_style(
        template.grid_color,
        template.grid_line_width,
    ));

    push_horizontal_lines(&mut ops, &space, mesh, &template.margins, mesh.left(), mesh.right());

    for (i, &x) in mesh.xs.iter().enumerate() {
        if skip_edge(i, mesh.xs.len(), template.margins.left, template.margins.right) {
            continue;
        }
        ops.extend(drawing::vertical_line(&space, x, mesh.top(), mesh.bottom()));
    }

    ops.push(drawing::restore_state());
    ops
}

fn dotted_operations(template: &PageTemplate, mesh: &Mesh) -> Vec<Operation> {
    let space = PageSpace::new(template.paper_height);
    let mut ops = vec![drawing::save_state()];
    ops.extend(drawing::set_stroke_style(
        template.grid_color,
        template.guide_line_width,
    ));
    ops.push(drawing::round_line_cap());
    ops.push(drawing::dash_pattern(
        &[DOT_ON_LENGTH, mm_to_pt(template.cell_size)],
        0.0,
    ));

    // Dots land one cell apart starting at the line's origin; at a zero
    // margin the bounds grow outward by one cell so the spacing stays
    // uniform to the page edge.
    let mut start_x = mesh.left();
    let mut end_x = mesh.right();
    if template.margins.left == 0.0 {
        start_x -= template.cell_size;
    }
    if template.margins.right == 0.0 {
        end_x += template.cell_size;
    }

    push_horizontal_lines(&mut ops, &space, mesh, &template.margins, start_x, end_x);

    ops.push(drawing::restore_state());
    ops
}

fn ruled_operations(template: &PageTemplate, mesh: &Mesh) -> Vec<Operation> {
    let space = PageSpace::new(template.paper_height);
    let mut ops = vec![drawing::save_state()];
    ops.extend(drawing::set_stroke_style(
        template.grid_color,
        template.grid_line_width,
    ));

    push_horizontal_lines(&mut ops, &space, mesh, &template.margins, mesh.left(), mesh.right());

    ops.push(drawing::restore_state());
    ops
}

fn push_horizontal_lines(
    ops: &mut Vec<Operation>,
    space: &PageSpace,
    mesh: &Mesh,
    margins: &Margins,
    start_x: f32,
    end_x: f32,
) {
    for (i, &y) in mesh.ys.iter().enumerate() {
        if skip_edge(i, mesh.ys.len(), margins.top, margins.bottom) {
            continue;
        }
        ops.extend(drawing::horizontal_line(space, start_x, end_x, y));
    }
}

/// A line on a page edge is dropped when the adjacent margin is zero,
/// which would otherwise double the boundary stroke.
fn skip_edge(index: usize, len: usize, leading_margin: f32, trailing_margin: f32) -> bool {
    (index == 0 && leading_margin == 0.0) || (index + 1 == len && trailing_margin == 0.0)
}
