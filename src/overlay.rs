//! Grid-aligned table overlay
//!
//! The table occupies the band between the active guide lines and its
//! separators snap to grid multiples, so table cells always contain a
//! whole number of pattern cells.

use crate::drawing::{self, PageSpace};
use crate::guides::GuideLayout;
use crate::mesh::Mesh;
use crate::template::PageTemplate;
use lopdf::content::Operation;
use tracing::trace;

/// Resolved table geometry in millimetres
#[derive(Debug, Clone, PartialEq)]
pub struct TableGrid {
    /// Top of the row band (title line, or printable top when disabled)
    pub top: f32,
    /// Bottom of the row band (summary line, or printable bottom)
    pub bottom: f32,
    /// Left edge of the column band (left cue, or printable left)
    pub left: f32,
    /// Right edge of the column band (right cue, or printable right)
    pub right: f32,
    /// Grid-aligned spacing between row separators
    pub row_step: f32,
    /// Grid-aligned spacing between column separators
    pub column_step: f32,
    /// Upper end of column separators, inset at a drawn title rule
    pub separator_top: f32,
    /// Lower end of column separators, inset at a drawn summary rule
    pub separator_bottom: f32,
    /// Number of table rows
    pub rows: u32,
    /// Number of table columns
    pub columns: u32,
}

impl TableGrid {
    /// Compute the table bands and separator spacing
    pub fn calculate(template: &PageTemplate, mesh: &Mesh, guides: &GuideLayout) -> Self {
        let top = guides.title_y.unwrap_or_else(|| mesh.top());
        let bottom = guides.summary_y.unwrap_or_else(|| mesh.bottom());
        let left = guides.cue_left_x.unwrap_or_else(|| mesh.left());
        let right = guides.cue_right_x.unwrap_or_else(|| mesh.right());

        let grid = Self {
            top,
            bottom,
            left,
            right,
            row_step: row_step(bottom - top, template.table_rows, template.cell_size),
            column_step: column_step(right - left, template.table_columns, template.cell_size),
            separator_top: guides.cue_top,
            separator_bottom: guides.cue_bottom,
            rows: template.table_rows,
            columns: template.table_columns,
        };
        trace!("Calculated table grid: {:?}", grid);
        grid
    }
}

/// Row separator spacing: the raw division rounded up to the next grid
/// multiple, so rows never come out smaller than the exact split
pub fn row_step(band_height: f32, rows: u32, cell_size: f32) -> f32 {
    (band_height / rows as f32 / cell_size).ceil() * cell_size
}

/// Column separator spacing: the raw division rounded to the nearest
/// grid multiple, ties rounding up
pub fn column_step(band_width: f32, columns: u32, cell_size: f32) -> f32 {
    let raw = band_width / columns as f32;
    let whole = (raw / cell_size).floor();
    let remainder = raw / cell_size - whole;
    if remainder < 0.5 {
        whole * cell_size
    } else {
        (whole + 1.0) * cell_size
    }
}

/// Generate the drawing operations for the table separators
///
/// A single row or column draws no separators on that axis.
pub fn generate_table_operations(template: &PageTemplate, grid: &TableGrid) -> Vec<Operation> {
    if grid.rows < 2 && grid.columns < 2 {
        return Vec::new();
    }

    let space = PageSpace::new(template.paper_height);
    let mut ops = vec![drawing::save_state()];
    ops.extend(drawing::set_stroke_style(
        template.table_color,
        template.guide_line_width,
    ));

    for i in 1..grid.rows {
        let y = grid.top + grid.row_step * i as f32;
        ops.extend(drawing::horizontal_line(&space, grid.left, grid.right, y));
    }

    for j in 1..grid.columns {
        let x = grid.left + grid.column_step * j as f32;
        ops.extend(drawing::vertical_line(
            &space,
            x,
            grid.separator_top,
            grid.separator_bottom,
        ));
    }

    ops.push(drawing::restore_state());
    ops
}
