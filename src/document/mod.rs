//! Unified document abstraction
//!
//! This module provides the format-agnostic side of text extraction: the
//! input types, the error type and the [`TextExtractor`] trait that the
//! per-format implementations in `formats` fulfil.
//!
//! # Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────┐
//!   │                DocumentInput                 │
//!   │   Upload(UploadedFile)  |  Typed(String)     │
//!   └──────────────────────────────────────────────┘
//!                         │ (upload only)
//!           ┌─────────────┴─────────────┐
//!           ▼                           ▼
//!   ┌──────────────────┐       ┌──────────────────┐
//!   │ PdfTextExtractor │       │ DocxTextExtractor│
//!   │     (lopdf)      │       │ (zip + quick-xml)│
//!   └──────────────────┘       └──────────────────┘
//! ```

mod error;
mod traits;
mod types;

pub use error::{DocumentError, Result};
pub use traits::TextExtractor;
pub use types::{
    DocumentFormat, DocumentInput, InputMode, UploadedFile, ACCEPTED_UPLOADS, DOCX_MIME, PDF_MIME,
};
