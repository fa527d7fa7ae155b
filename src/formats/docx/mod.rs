//! DOCX format implementation
//!
//! This module provides the `TextExtractor` implementation for Office Open
//! XML word processing documents, reading the ZIP container with `zip` and
//! the main part with `quick-xml`.

mod parser;

pub use parser::DocxTextExtractor;
