//! PDF format implementation
//!
//! This module provides the `TextExtractor` implementation for PDF documents
//! using lopdf. Pages are extracted one by one and joined with a single space.

mod parser;

pub use parser::PdfTextExtractor;
