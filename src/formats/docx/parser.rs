//! DOCX TextExtractor implementation
//!
//! A DOCX file is a ZIP container; the body lives in `word/document.xml`.
//! Paragraph text is the concatenation of its `w:t` runs. Only body-level
//! paragraphs are collected: paragraphs nested in tables or text boxes are
//! skipped, which matches the paragraph list Word document readers expose.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::document::{DocumentError, DocumentFormat, Result, TextExtractor};

/// Main document part inside the container
const DOCUMENT_PART: &str = "word/document.xml";

/// Separator placed between consecutive paragraphs
const PARAGRAPH_SEPARATOR: &str = "\n";

/// DOCX implementation of TextExtractor
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxTextExtractor;

impl DocxTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Text of every body-level paragraph, in document order
    pub fn paragraphs(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let mut xml = String::new();
        match archive.by_name(DOCUMENT_PART) {
            Ok(mut part) => {
                part.read_to_string(&mut xml)?;
            }
            Err(ZipError::FileNotFound) => {
                return Err(DocumentError::MissingPart(DOCUMENT_PART.to_string()))
            }
            Err(e) => return Err(e.into()),
        }

        let paragraphs = parse_document_xml(&xml)?;
        tracing::debug!(paragraphs = paragraphs.len(), "Loaded DOCX");
        Ok(paragraphs)
    }
}

impl TextExtractor for DocxTextExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        Ok(self.paragraphs(bytes)?.join(PARAGRAPH_SEPARATOR))
    }
}

/// Collect paragraph texts from `word/document.xml`
fn parse_document_xml(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    // Depth inside w:tbl / w:txbxContent; everything in there is ignored
    let mut skip_depth = 0usize;
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" | b"txbxContent" => skip_depth += 1,
                _ if skip_depth > 0 => {}
                b"p" => current = Some(String::new()),
                b"r" => run_depth += 1,
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => {
                if skip_depth > 0 {
                    continue;
                }
                match e.local_name().as_ref() {
                    b"p" => paragraphs.push(String::new()),
                    b"tab" if run_depth > 0 => push_char(&mut current, '\t'),
                    b"br" | b"cr" if run_depth > 0 => push_char(&mut current, '\n'),
                    _ => {}
                }
            }
            Event::Text(t) => {
                if skip_depth == 0 && in_text {
                    if let Some(paragraph) = current.as_mut() {
                        paragraph.push_str(&t.unescape()?);
                    }
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"tbl" | b"txbxContent" => skip_depth = skip_depth.saturating_sub(1),
                _ if skip_depth > 0 => {}
                b"p" => {
                    if let Some(paragraph) = current.take() {
                        paragraphs.push(paragraph);
                    }
                }
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_char(current: &mut Option<String>, c: char) {
    if let Some(paragraph) = current.as_mut() {
        paragraph.push(c);
    }
}
