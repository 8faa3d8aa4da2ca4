//! Cornell note page example
//!
//! Draws a dotted page with title and summary bands, cue columns and a
//! two-column table in the note area, using the drawing trait directly
//! on an existing document.

use lopdf_paper::page::new_page_document;
use lopdf_paper::{Color, GuidePercents, Margins, PageTemplate, Pattern, TemplateDrawing};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with debug level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let template = PageTemplate::a4()
        .with_pattern(Pattern::Dotted)
        .with_guides(GuidePercents::cornell())
        .with_table(1, 2)
        .with_margins(Margins::symmetric(5.0, 5.0))
        .with_line_color(Color::rgb_bytes(60, 60, 60))
        .with_table_color(Color::rgba(0.82, 0.82, 0.82, 0.5));

    // Create the page scaffold, then draw the template onto it
    let (mut doc, page_id) = new_page_document(template.paper_width, template.paper_height);
    doc.draw_page_template(page_id, &template)?;

    doc.save("cornell_page.pdf")?;
    println!("PDF saved as 'cornell_page.pdf'");

    Ok(())
}
