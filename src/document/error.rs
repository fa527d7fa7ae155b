//! Document error types
//!
//! Unified error handling for all supported upload formats (PDF, DOCX).

use thiserror::Error;

/// Unified document error type
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to parse document
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A required part of the container is missing (e.g. word/document.xml)
    #[error("Missing document part: {0}")]
    MissingPart(String),

    /// Malformed XML inside an Office container
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Broken ZIP container
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error (std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;

impl From<lopdf::Error> for DocumentError {
    fn from(err: lopdf::Error) -> Self {
        DocumentError::ParseError(err.to_string())
    }
}
