//! # Source Errors

use thiserror::Error;

/// Errors that can occur while reading outlines.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The font data is not a parsable font.
    #[error("Font parse error: {0}")]
    Font(#[from] ttf_parser::FaceParsingError),

    /// The drawing is not well-formed markup.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The drawing contains no `<rect>` element.
    #[error("No <rect> element found")]
    MissingRectangle,

    /// A numeric attribute could not be parsed.
    #[error("Invalid attribute {name}=\"{value}\"")]
    InvalidAttribute { name: String, value: String },

    /// Glyph size is zero, negative or not finite.
    #[error("Invalid glyph size: {0} (must be positive and finite)")]
    InvalidSize(f64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for outline sources.
pub type SourceResult<T> = Result<T, SourceError>;
