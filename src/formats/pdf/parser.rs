//! PDF TextExtractor implementation
//!
//! Walks the page tree with lopdf and decodes each page's content stream.

use lopdf::Document;

use crate::document::{DocumentFormat, Result, TextExtractor};

/// Separator placed between the text of consecutive pages
const PAGE_SEPARATOR: &str = " ";

/// PDF implementation of TextExtractor
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Text of every page, in page order.
    ///
    /// A page whose content cannot be decoded yields an empty string rather
    /// than failing the whole document.
    pub fn page_texts(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let doc = Document::load_mem(bytes)?;
        let pages = doc.get_pages();
        tracing::debug!(pages = pages.len(), "Loaded PDF");

        let texts = pages
            .keys()
            .map(|&page_number| match doc.extract_text(&[page_number]) {
                Ok(text) => text.trim_end().to_string(),
                Err(e) => {
                    tracing::debug!(page = page_number, error = %e, "Page has no extractable text");
                    String::new()
                }
            })
            .collect();

        Ok(texts)
    }
}

impl TextExtractor for PdfTextExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        Ok(self.page_texts(bytes)?.join(PAGE_SEPARATOR))
    }
}
