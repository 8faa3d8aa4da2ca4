//! Pattern sweep example
//!
//! Writes one PDF per combination of base pattern and guide layout into
//! a `patterned-pages/` directory, useful for eyeballing the whole
//! template family at once.

use lopdf_paper::page::save_template;
use lopdf_paper::{GuidePercents, PageTemplate, Pattern};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let patterns = [Pattern::Grid, Pattern::Dotted, Pattern::Ruled, Pattern::Blank];
    let layouts = [
        ("plain", GuidePercents::none()),
        ("cornell", GuidePercents::cornell()),
        ("headed", GuidePercents::new(8.0, 0.0, 0.0, 0.0)),
    ];

    for pattern in patterns {
        for &(name, guides) in &layouts {
            let mut template = PageTemplate::a4()
                .with_pattern(pattern)
                .with_guides(guides);
            if name == "cornell" {
                template = template.with_table(1, 2);
            }

            let path = format!("patterned-pages/{pattern} - {name}.pdf");
            save_template(&path, &template)?;
            println!("Saved '{path}'");
        }
    }

    Ok(())
}
