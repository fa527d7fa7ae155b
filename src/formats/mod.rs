//! Format-specific document implementations
//!
//! This module contains implementations of the [`TextExtractor`] trait for
//! the supported upload formats (PDF, DOCX), plus [`extract_text`], the
//! extraction boundary used by the pipeline.
//!
//! # Architecture
//!
//! Each format module provides an extractor that turns the raw upload into a
//! flat string:
//! - PDF: page texts joined with a single space
//! - DOCX: paragraph texts joined with a newline

pub mod docx;
pub mod pdf;

#[cfg(test)]
pub(crate) mod fixtures;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::document::{DocumentError, DocumentFormat, TextExtractor};
use crate::notice::Notice;

pub use docx::DocxTextExtractor;
pub use pdf::PdfTextExtractor;

/// Pick the extractor for a declared format
pub fn extractor_for(format: DocumentFormat) -> Box<dyn TextExtractor> {
    match format {
        DocumentFormat::Pdf => Box::new(PdfTextExtractor::new()),
        DocumentFormat::Docx => Box::new(DocxTextExtractor::new()),
    }
}

/// Text produced at the extraction boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    /// Error notice when the document could not be parsed
    pub notice: Option<Notice>,
}

/// Extract text from an upload, never failing.
///
/// A parse failure is logged and reported as an error notice; the text then
/// degrades to an empty string. Parsers that panic on malformed input are
/// treated the same way.
pub fn extract_text(format: DocumentFormat, bytes: &[u8]) -> Extraction {
    extract_with(extractor_for(format).as_ref(), bytes)
}

fn extract_with(extractor: &dyn TextExtractor, bytes: &[u8]) -> Extraction {
    let format = extractor.format();

    let result = panic::catch_unwind(AssertUnwindSafe(|| extractor.extract(bytes)))
        .unwrap_or_else(|payload| {
            Err(DocumentError::ParseError(format!(
                "malformed document ({})",
                panic_message(&*payload)
            )))
        });

    match result {
        Ok(text) => {
            tracing::debug!(format = format.label(), chars = text.len(), "Extracted text");
            Extraction { text, notice: None }
        }
        Err(e) => {
            tracing::warn!(format = format.label(), error = %e, "Text extraction failed");
            Extraction {
                text: String::new(),
                notice: Some(Notice::error(format!("{} error: {}", format.label(), e))),
            }
        }
    }
}

fn panic_message<'a>(payload: &'a (dyn Any + Send + 'static)) -> &'a str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "parser panicked"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;

    #[test]
    fn test_dispatch_by_format() {
        assert_eq!(extractor_for(DocumentFormat::Pdf).format(), DocumentFormat::Pdf);
        assert_eq!(extractor_for(DocumentFormat::Docx).format(), DocumentFormat::Docx);
    }

    #[test]
    fn test_extract_valid_documents() {
        let pdf = fixtures::pdf_with_pages(&[Some("alpha beta"), Some("gamma")]);
        let extraction = extract_text(DocumentFormat::Pdf, &pdf);
        assert_eq!(extraction.text, "alpha beta gamma");
        assert!(extraction.notice.is_none());

        let docx = fixtures::docx_with_paragraphs(&["alpha beta", "gamma"]);
        let extraction = extract_text(DocumentFormat::Docx, &docx);
        assert_eq!(extraction.text, "alpha beta\ngamma");
        assert!(extraction.notice.is_none());
    }

    #[test]
    fn test_malformed_bytes_degrade_to_empty_text() {
        for format in [DocumentFormat::Pdf, DocumentFormat::Docx] {
            let extraction = extract_text(format, b"\x00\x01garbage bytes");
            assert_eq!(extraction.text, "");

            let notice = extraction.notice.expect("failure should be reported");
            assert_eq!(notice.level, NoticeLevel::Error);
            assert!(notice.message.starts_with(format.label()));
        }
    }

    #[test]
    fn test_wrong_container_for_declared_format() {
        // A DOCX declared as PDF (and vice versa) is a parse failure, not a crash
        let docx = fixtures::docx_with_paragraphs(&["hello"]);
        let extraction = extract_text(DocumentFormat::Pdf, &docx);
        assert_eq!(extraction.text, "");
        assert!(extraction.notice.is_some());

        let pdf = fixtures::pdf_with_pages(&[Some("hello")]);
        let extraction = extract_text(DocumentFormat::Docx, &pdf);
        assert_eq!(extraction.text, "");
        assert!(extraction.notice.is_some());
    }

    struct PanickingExtractor;

    impl TextExtractor for PanickingExtractor {
        fn format(&self) -> DocumentFormat {
            DocumentFormat::Pdf
        }

        fn extract(&self, _bytes: &[u8]) -> crate::document::Result<String> {
            panic!("index out of bounds")
        }
    }

    #[test]
    fn test_parser_panic_stays_inside_boundary() {
        let extraction = extract_with(&PanickingExtractor, b"%PDF-1.5");
        assert_eq!(extraction.text, "");

        let notice = extraction.notice.expect("panic should be reported");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.starts_with("PDF error:"), "{}", notice.message);
        assert!(notice.message.contains("index out of bounds"));
    }

    #[test]
    fn test_mutated_pdfs_never_escape_boundary() {
        let pristine = fixtures::pdf_with_pages(&[Some("alpha beta"), Some("gamma delta")]);

        // xorshift64, fixed seed
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };

        for round in 0..400 {
            let mut bytes = pristine.clone();
            for _ in 0..(1 + next() % 8) {
                let at = (next() % bytes.len() as u64) as usize;
                bytes[at] = next() as u8;
            }
            if round % 4 == 0 {
                bytes.truncate((next() % bytes.len() as u64) as usize);
            }

            let extraction = extract_text(DocumentFormat::Pdf, &bytes);
            if extraction.notice.is_some() {
                assert_eq!(extraction.text, "", "round {}", round);
            }
        }
    }
}
