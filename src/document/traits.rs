//! Document traits
//!
//! Format-agnostic interface for turning document bytes into plain text.

use super::error::Result;
use super::types::DocumentFormat;

/// Format-specific plain text extractor
///
/// Implementations are stateless; one instance can serve any number of
/// documents of its format.
pub trait TextExtractor: Send + Sync {
    /// Format handled by this extractor
    fn format(&self) -> DocumentFormat;

    /// Extract the document's text as one flat string
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}
