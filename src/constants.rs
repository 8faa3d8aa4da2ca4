//! Constants for page dimensions and drawing defaults
//!
//! The layout engine works entirely in millimetres; conversion to PDF
//! points happens at the drawing boundary.

/// Conversion factor from millimetres to PDF points (72 points per inch)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimetres to PDF points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert PDF points to millimetres
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

/// A4 page width in millimetres
pub const A4_WIDTH_MM: f32 = 210.0;

/// A4 page height in millimetres
pub const A4_HEIGHT_MM: f32 = 297.0;

/// A5 page width in millimetres
pub const A5_WIDTH_MM: f32 = 148.0;

/// A5 page height in millimetres
pub const A5_HEIGHT_MM: f32 = 210.0;

/// US Letter page width in millimetres
pub const LETTER_WIDTH_MM: f32 = 215.9;

/// US Letter page height in millimetres
pub const LETTER_HEIGHT_MM: f32 = 279.4;

/// Default grid cell size in millimetres
pub const DEFAULT_CELL_SIZE: f32 = 5.0;

/// Default width of grid pattern strokes in millimetres
pub const DEFAULT_GRID_LINE_WIDTH: f32 = 0.1;

/// Default width of guide and table strokes in millimetres
pub const DEFAULT_GUIDE_LINE_WIDTH: f32 = 0.25;

/// Dash "on" length in points, short enough that round caps render
/// each segment as a single dot
pub const DOT_ON_LENGTH: f32 = 0.001;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion_round_trip() {
        assert!((mm_to_pt(25.4) - 72.0).abs() < 1e-4);
        assert!((pt_to_mm(mm_to_pt(210.0)) - 210.0).abs() < 1e-4);
    }
}
