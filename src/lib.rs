//! A page template drawing library for PDFs built on lopdf
//!
//! This library renders notebook and planner style page templates:
//! grid, dotted, ruled or blank base patterns, optional Cornell style
//! guide lines (title, summary and cue rules) and a grid-aligned table
//! overlay. Layout is computed in millimetres from the top-left corner
//! of the page; conversion to PDF points happens at the drawing
//! boundary.

use lopdf::{Document, Object, ObjectId, content::Operation};
use tracing::{debug, instrument, trace};

mod drawing;
pub mod constants;
pub mod error;
pub mod guides;
pub mod mesh;
pub mod overlay;
pub mod page;
pub mod pattern;
pub mod style;
pub mod template;

pub use error::{Result, TemplateError};
pub use guides::GuidePercents;
pub use pattern::Pattern;
pub use style::Color;
pub use template::{Margins, Overlay, PageTemplate};

use guides::{GuideIndices, GuideLayout};
use mesh::Mesh;
use overlay::TableGrid;

/// Extension trait for lopdf::Document to add page template drawing
pub trait TemplateDrawing {
    /// Draw a page template onto an existing page
    ///
    /// # Arguments
    /// * `page_id` - The object ID of the page to draw on
    /// * `template` - The template configuration
    ///
    /// # Returns
    /// Returns Ok(()) on success, or an error if the configuration is
    /// invalid or the page cannot be written
    fn draw_page_template(&mut self, page_id: ObjectId, template: &PageTemplate) -> Result<()>;

    /// Create template content operations without touching the document
    ///
    /// Useful for combining with other content. Translucent colors
    /// reference alpha graphics states that must be registered in the
    /// page resources separately; `draw_page_template` handles that.
    fn create_template_content(&self, template: &PageTemplate) -> Result<Vec<Operation>>;
}

impl TemplateDrawing for Document {
    #[instrument(skip(self, template), fields(pattern = %template.pattern))]
    fn draw_page_template(&mut self, page_id: ObjectId, template: &PageTemplate) -> Result<()> {
        debug!("Drawing page template on page {:?}", page_id);

        if !matches!(self.get_object(page_id), Ok(Object::Dictionary(_))) {
            return Err(TemplateError::PageNotFound(page_id));
        }

        let operations = self.create_template_content(template)?;

        drawing::register_alpha_states(self, page_id, &template.colors())?;
        drawing::add_operations_to_page(self, page_id, operations)?;

        Ok(())
    }

    fn create_template_content(&self, template: &PageTemplate) -> Result<Vec<Operation>> {
        template.validate()?;

        let space = drawing::PageSpace::new(template.paper_height);

        // Background fill covers the full page, margins included
        let mut operations = vec![drawing::save_state()];
        operations.extend(drawing::set_fill_style(template.background_color));
        operations.extend(drawing::fill_rect(
            &space,
            0.0,
            0.0,
            template.paper_width,
            template.paper_height,
        ));
        operations.push(drawing::restore_state());

        let mesh = Mesh::build(
            template.printable_width(),
            template.printable_height(),
            template.cell_size,
            template.margins.left,
            template.margins.top,
        );

        operations.extend(pattern::generate_pattern_operations(template, &mesh));

        // Guides come before the table: the table bands depend on which
        // guide lines are active
        let indices = GuideIndices::derive(&template.guides, &mesh);
        trace!("Guide indices: {:?}", indices);
        let guide_layout = GuideLayout::resolve(&indices, &mesh, template.guide_line_width);
        operations.extend(guides::generate_guide_operations(template, &guide_layout));

        if template.overlay == Overlay::Table {
            let table = TableGrid::calculate(template, &mesh, &guide_layout);
            operations.extend(overlay::generate_table_operations(template, &table));
        }

        Ok(operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_template_is_background_only() {
        let doc = Document::new();
        let template = PageTemplate::a4().with_pattern(Pattern::Blank);
        let ops = doc.create_template_content(&template).unwrap();

        assert_eq!(ops.iter().filter(|op| op.operator == "re").count(), 1);
        assert_eq!(ops.iter().filter(|op| op.operator == "f").count(), 1);
        assert_eq!(ops.iter().filter(|op| op.operator == "S").count(), 0);
    }

    #[test]
    fn test_invalid_template_is_rejected() {
        let doc = Document::new();
        let template = PageTemplate::a4().with_cell_size(-5.0);
        assert!(matches!(
            doc.create_template_content(&template),
            Err(TemplateError::ConfigError(_))
        ));
    }

    #[test]
    fn test_drawing_on_missing_page_fails() {
        let mut doc = Document::new();
        let template = PageTemplate::a4();
        let missing = (42, 0);

        assert!(matches!(
            doc.draw_page_template(missing, &template),
            Err(TemplateError::PageNotFound(id)) if id == missing
        ));
    }
}
