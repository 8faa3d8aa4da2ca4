//! Single-page document scaffolding and output

use crate::TemplateDrawing;
use crate::constants::mm_to_pt;
use crate::error::Result;
use crate::template::PageTemplate;
use lopdf::{Document, Object, ObjectId, dictionary};
use std::path::Path;
use tracing::debug;

/// Create a one-page document of the given size in millimetres
///
/// Returns the document and the object ID of its single page.
pub fn new_page_document(width_mm: f32, height_mm: f32) -> (Document, ObjectId) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            mm_to_pt(width_mm).into(),
            mm_to_pt(height_mm).into(),
        ],
        "Resources" => dictionary! {},
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    (doc, page_id)
}

/// Render a template into a new single-page document
pub fn render_template(template: &PageTemplate) -> Result<Document> {
    let (mut doc, page_id) = new_page_document(template.paper_width, template.paper_height);
    doc.draw_page_template(page_id, template)?;
    Ok(doc)
}

/// Render a template and save it to the given path
///
/// Missing parent directories are created.
pub fn save_template<P: AsRef<Path>>(path: P, template: &PageTemplate) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut doc = render_template(template)?;
    debug!("Saving rendered page to {}", path.display());
    doc.save(path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_document_structure() {
        let (doc, page_id) = new_page_document(210.0, 297.0);

        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages.values().next().copied(), Some(page_id));

        let page = doc
            .get_object(page_id)
            .and_then(Object::as_dict)
            .expect("page dictionary");
        let media_box = page
            .get(b"MediaBox")
            .and_then(Object::as_array)
            .expect("media box");
        assert_eq!(media_box.len(), 4);
    }

    #[test]
    fn test_render_produces_page_content() {
        let doc = render_template(&PageTemplate::a4()).unwrap();
        let page_id = doc.get_pages().values().next().copied().unwrap();
        let content = doc.get_page_content(page_id).unwrap();
        assert!(!content.is_empty());
    }
}
