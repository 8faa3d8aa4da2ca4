//! Coordinate mesh over the printable page area

use tracing::trace;

/// Grid coordinates covering the printable area at cell-size spacing
///
/// Coordinates step from the printable origin in whole cells and are
/// extended by one value that clamps exactly to the printable boundary,
/// so the final cell may be partial but the mesh never overshoots the
/// page. Both axes are offset by the top-left margin.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Horizontal coordinates in millimetres, left to right
    pub xs: Vec<f32>,
    /// Vertical coordinates in millimetres, top to bottom
    pub ys: Vec<f32>,
    /// Number of whole cells across the printable width
    pub columns: usize,
    /// Number of whole cells down the printable height
    pub rows: usize,
}

impl Mesh {
    /// Build the mesh for a printable area
    ///
    /// `offset_x`/`offset_y` are the left and top margins; the first
    /// coordinate on each axis equals the offset and the last equals
    /// offset plus the printable span exactly.
    pub fn build(
        printable_width: f32,
        printable_height: f32,
        cell_size: f32,
        offset_x: f32,
        offset_y: f32,
    ) -> Self {
        let xs = axis_coordinates(printable_width, cell_size, offset_x);
        let ys = axis_coordinates(printable_height, cell_size, offset_y);
        let columns = (printable_width / cell_size) as usize;
        let rows = (printable_height / cell_size) as usize;

        trace!(
            "Built mesh: {} columns, {} rows, {}x{} coordinates",
            columns,
            rows,
            xs.len(),
            ys.len()
        );

        Self {
            xs,
            ys,
            columns,
            rows,
        }
    }

    /// Left edge of the printable area
    pub fn left(&self) -> f32 {
        self.xs[0]
    }

    /// Right edge of the printable area
    pub fn right(&self) -> f32 {
        self.xs[self.xs.len() - 1]
    }

    /// Top edge of the printable area
    pub fn top(&self) -> f32 {
        self.ys[0]
    }

    /// Bottom edge of the printable area
    pub fn bottom(&self) -> f32 {
        self.ys[self.ys.len() - 1]
    }
}

/// Stepped coordinates along one axis, clamped to the exact span
///
/// Each value is computed as index times cell size rather than by
/// accumulation, so repeated stepping cannot drift.
fn axis_coordinates(span: f32, cell_size: f32, offset: f32) -> Vec<f32> {
    let mut coords = Vec::with_capacity((span / cell_size) as usize + 2);
    let mut i = 0usize;
    loop {
        let step = i as f32 * cell_size;
        if step >= span {
            break;
        }
        coords.push(offset + step);
        i += 1;
    }
    coords.push(offset + span);
    coords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_covers_a4_at_5mm() {
        let mesh = Mesh::build(210.0, 297.0, 5.0, 0.0, 0.0);

        // 297 is not a multiple of 5, so the y axis gains a clamp value
        assert_eq!(mesh.xs.len(), 43);
        assert_eq!(mesh.ys.len(), 61);
        assert_eq!(mesh.columns, 42);
        assert_eq!(mesh.rows, 59);

        assert_eq!(mesh.left(), 0.0);
        assert_eq!(mesh.right(), 210.0);
        assert_eq!(mesh.top(), 0.0);
        assert_eq!(mesh.bottom(), 297.0);
    }

    #[test]
    fn test_mesh_clamps_partial_cell() {
        let mesh = Mesh::build(7.0, 12.0, 5.0, 0.0, 0.0);

        assert_eq!(mesh.xs, vec![0.0, 5.0, 7.0]);
        assert_eq!(mesh.ys, vec![0.0, 5.0, 10.0, 12.0]);
        assert_eq!(mesh.columns, 1);
        assert_eq!(mesh.rows, 2);
    }

    #[test]
    fn test_mesh_offsets_by_margin() {
        let mesh = Mesh::build(200.0, 287.0, 5.0, 5.0, 5.0);

        assert_eq!(mesh.left(), 5.0);
        assert_eq!(mesh.right(), 205.0);
        assert_eq!(mesh.top(), 5.0);
        assert_eq!(mesh.bottom(), 292.0);
    }

    #[test]
    fn test_mesh_has_no_stepping_drift() {
        // Thousands of tiny cells must still land exactly on the boundary
        let mesh = Mesh::build(210.0, 297.0, 0.1, 0.0, 0.0);

        assert_eq!(mesh.right(), 210.0);
        assert_eq!(mesh.bottom(), 297.0);
    }
}
