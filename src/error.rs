//! Error types for the lopdf-paper library

use thiserror::Error;

/// Result type alias using TemplateError
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur when drawing page templates
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    PdfError(#[from] lopdf::Error),

    /// Invalid template configuration
    #[error("Invalid template configuration: {0}")]
    ConfigError(String),

    /// Output destination could not be created or written
    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),

    /// Page not found
    #[error("Page with ID {0:?} not found")]
    PageNotFound(lopdf::ObjectId),
}
