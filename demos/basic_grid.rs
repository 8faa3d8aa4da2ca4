//! Basic grid page example

use lopdf_paper::PageTemplate;
use lopdf_paper::page::save_template;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with debug level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    // An A4 page with the default light gray 5mm grid
    let template = PageTemplate::a4();

    save_template("basic_grid.pdf", &template)?;
    println!("PDF saved as 'basic_grid.pdf'");

    Ok(())
}
