//! Page template configuration

use crate::constants::{
    A4_HEIGHT_MM, A4_WIDTH_MM, A5_HEIGHT_MM, A5_WIDTH_MM, DEFAULT_CELL_SIZE,
    DEFAULT_GRID_LINE_WIDTH, DEFAULT_GUIDE_LINE_WIDTH, LETTER_HEIGHT_MM, LETTER_WIDTH_MM,
};
use crate::error::{Result, TemplateError};
use crate::guides::GuidePercents;
use crate::pattern::Pattern;
use crate::style::Color;
use std::str::FromStr;

/// Four-sided page margin in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margins {
    /// Create margins with explicit values for each side
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// No margin on any side
    pub fn none() -> Self {
        Self::uniform(0.0)
    }

    /// The same margin on every side
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Margins with vertical (top/bottom) and horizontal (left/right) values
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Combined left and right margin
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Combined top and bottom margin
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::none()
    }
}

/// Optional overlay drawn on top of the base pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// No overlay
    None,
    /// Grid-aligned table bounded by the active guide lines
    Table,
}

impl Default for Overlay {
    fn default() -> Self {
        Self::None
    }
}

impl FromStr for Overlay {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(Self::Table),
            "none" | "" => Ok(Self::None),
            other => Err(TemplateError::ConfigError(format!(
                "unknown overlay kind: {other:?}"
            ))),
        }
    }
}

/// Full configuration for one patterned page
///
/// All lengths are in millimetres. The default is an A4 portrait page
/// with a light gray 5mm grid, no guides and no overlay.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    /// Page width in millimetres
    pub paper_width: f32,
    /// Page height in millimetres
    pub paper_height: f32,
    /// Base pattern drawn over the printable area
    pub pattern: Pattern,
    /// Overlay drawn on top of pattern and guides
    pub overlay: Overlay,
    /// Stroke color for the base pattern
    pub grid_color: Color,
    /// Stroke color for guide lines
    pub line_color: Color,
    /// Fill color for the full page background
    pub background_color: Color,
    /// Stroke color for table separators
    pub table_color: Color,
    /// Grid cell size in millimetres
    pub cell_size: f32,
    /// Stroke width for grid and ruled lines
    pub grid_line_width: f32,
    /// Stroke width for guide lines, table separators and dots
    pub guide_line_width: f32,
    /// Percentage positions of the four guide lines
    pub guides: GuidePercents,
    /// Number of table rows
    pub table_rows: u32,
    /// Number of table columns
    pub table_columns: u32,
    /// Page margins
    pub margins: Margins,
}

impl PageTemplate {
    /// Create a template for a page of the given size in millimetres
    pub fn new(paper_width: f32, paper_height: f32) -> Self {
        Self {
            paper_width,
            paper_height,
            pattern: Pattern::Grid,
            overlay: Overlay::None,
            grid_color: Color::light_gray(),
            line_color: Color::black(),
            background_color: Color::white(),
            table_color: Color::light_gray(),
            cell_size: DEFAULT_CELL_SIZE,
            grid_line_width: DEFAULT_GRID_LINE_WIDTH,
            guide_line_width: DEFAULT_GUIDE_LINE_WIDTH,
            guides: GuidePercents::default(),
            table_rows: 1,
            table_columns: 2,
            margins: Margins::none(),
        }
    }

    /// A4 portrait template
    pub fn a4() -> Self {
        Self::new(A4_WIDTH_MM, A4_HEIGHT_MM)
    }

    /// A5 portrait template
    pub fn a5() -> Self {
        Self::new(A5_WIDTH_MM, A5_HEIGHT_MM)
    }

    /// US Letter portrait template
    pub fn letter() -> Self {
        Self::new(LETTER_WIDTH_MM, LETTER_HEIGHT_MM)
    }

    /// Set the base pattern
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Set the overlay kind
    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        self.overlay = overlay;
        self
    }

    /// Set the grid cell size in millimetres
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Set the stroke width for grid and ruled lines
    pub fn with_grid_line_width(mut self, width: f32) -> Self {
        self.grid_line_width = width;
        self
    }

    /// Set the stroke width for guide lines and table separators
    pub fn with_guide_line_width(mut self, width: f32) -> Self {
        self.guide_line_width = width;
        self
    }

    /// Set the base pattern stroke color
    pub fn with_grid_color(mut self, color: Color) -> Self {
        self.grid_color = color;
        self
    }

    /// Set the guide line stroke color
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    /// Set the page background color
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the table separator stroke color
    pub fn with_table_color(mut self, color: Color) -> Self {
        self.table_color = color;
        self
    }

    /// Set the guide line percentages
    pub fn with_guides(mut self, guides: GuidePercents) -> Self {
        self.guides = guides;
        self
    }

    /// Request a table overlay with the given row and column counts
    pub fn with_table(mut self, rows: u32, columns: u32) -> Self {
        self.overlay = Overlay::Table;
        self.table_rows = rows;
        self.table_columns = columns;
        self
    }

    /// Set the page margins
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Printable width after subtracting left and right margins
    pub fn printable_width(&self) -> f32 {
        self.paper_width - self.margins.horizontal()
    }

    /// Printable height after subtracting top and bottom margins
    pub fn printable_height(&self) -> f32 {
        self.paper_height - self.margins.vertical()
    }

    /// All colors used by the template
    pub fn colors(&self) -> [Color; 4] {
        [
            self.background_color,
            self.grid_color,
            self.line_color,
            self.table_color,
        ]
    }

    /// Validate the template configuration
    pub fn validate(&self) -> Result<()> {
        // NaN compares false against every bound below, and an infinite
        // span would never terminate the mesh walk; reject both up front
        let lengths = [
            self.paper_width,
            self.paper_height,
            self.cell_size,
            self.grid_line_width,
            self.guide_line_width,
            self.margins.left,
            self.margins.top,
            self.margins.right,
            self.margins.bottom,
        ];
        if lengths.iter().any(|length| !length.is_finite()) {
            return Err(TemplateError::ConfigError(
                "page dimensions must be finite".to_string(),
            ));
        }
        if self.cell_size <= 0.0 {
            return Err(TemplateError::ConfigError(format!(
                "cell size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.grid_line_width <= 0.0 || self.guide_line_width <= 0.0 {
            return Err(TemplateError::ConfigError(format!(
                "line widths must be positive, got {} and {}",
                self.grid_line_width, self.guide_line_width
            )));
        }
        if self.margins.left < 0.0
            || self.margins.top < 0.0
            || self.margins.right < 0.0
            || self.margins.bottom < 0.0
        {
            return Err(TemplateError::ConfigError(
                "margins must not be negative".to_string(),
            ));
        }
        if self.printable_width() <= 0.0 || self.printable_height() <= 0.0 {
            return Err(TemplateError::ConfigError(format!(
                "margins leave no printable area on a {}x{}mm page",
                self.paper_width, self.paper_height
            )));
        }
        if self.table_rows < 1 || self.table_columns < 1 {
            return Err(TemplateError::ConfigError(format!(
                "table must have at least one row and column, got {}x{}",
                self.table_rows, self.table_columns
            )));
        }
        self.guides.validate()?;
        Ok(())
    }
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::a4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_builder() {
        let template = PageTemplate::a4()
            .with_pattern(Pattern::Dotted)
            .with_cell_size(4.0)
            .with_table(3, 4)
            .with_margins(Margins::uniform(10.0));

        assert_eq!(template.pattern, Pattern::Dotted);
        assert_eq!(template.overlay, Overlay::Table);
        assert_eq!(template.table_rows, 3);
        assert_eq!(template.printable_width(), 190.0);
        assert_eq!(template.printable_height(), 277.0);
        assert!(template.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_dimensions() {
        let template = PageTemplate::a4().with_cell_size(0.0);
        assert!(template.validate().is_err());

        let template = PageTemplate::a4().with_margins(Margins::uniform(150.0));
        assert!(template.validate().is_err());

        let template = PageTemplate::a4().with_margins(Margins::new(-1.0, 0.0, 0.0, 0.0));
        assert!(template.validate().is_err());

        let template = PageTemplate::a4().with_grid_line_width(0.0);
        assert!(template.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite_dimensions() {
        let template = PageTemplate::a4().with_cell_size(f32::NAN);
        assert!(template.validate().is_err());

        let template = PageTemplate::a4().with_margins(Margins::uniform(f32::NAN));
        assert!(template.validate().is_err());

        let template = PageTemplate::a4().with_cell_size(f32::INFINITY);
        assert!(template.validate().is_err());

        let template = PageTemplate::new(f32::INFINITY, 297.0);
        assert!(template.validate().is_err());

        let template = PageTemplate::a4().with_guide_line_width(f32::NAN);
        assert!(template.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_table() {
        let template = PageTemplate::a4().with_table(0, 2);
        assert!(template.validate().is_err());

        let template = PageTemplate::a4().with_table(1, 0);
        assert!(template.validate().is_err());
    }

    #[test]
    fn test_overlay_parsing() {
        assert_eq!("table".parse::<Overlay>().unwrap(), Overlay::Table);
        assert_eq!("none".parse::<Overlay>().unwrap(), Overlay::None);
        assert!("banner".parse::<Overlay>().is_err());
    }
}
