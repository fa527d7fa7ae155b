//! Core document types
//!
//! Input-side types shared by the routes, the format extractors and the
//! pipeline.

use serde::{Deserialize, Serialize};

/// MIME type browsers send for `.pdf` uploads
pub const PDF_MIME: &str = "application/pdf";

/// MIME type browsers send for `.docx` uploads
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Value for the file picker's `accept` attribute
pub const ACCEPTED_UPLOADS: &str = ".pdf,.docx,application/pdf,application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Detect format from MIME type
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim() {
            PDF_MIME => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            _ => None,
        }
    }

    /// Resolve the declared format of an upload.
    ///
    /// The content type wins. Browsers that send nothing useful
    /// (`application/octet-stream` or no header) fall back to the MIME type
    /// guessed from the file name.
    pub fn from_upload(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        match content_type.map(str::trim) {
            Some(ct) if !ct.is_empty() && ct != "application/octet-stream" => Self::from_mime(ct),
            _ => file_name
                .and_then(|name| mime_guess::from_path(name).first_raw())
                .and_then(Self::from_mime),
        }
    }

    /// MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => PDF_MIME,
            Self::Docx => DOCX_MIME,
        }
    }

    /// Short label used in user-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
        }
    }
}

/// An uploaded file whose format has already been accepted
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub format: DocumentFormat,
    pub bytes: Vec<u8>,
}

/// Which input control is active on the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Upload,
    Type,
}

impl InputMode {
    /// Parse the mode selector's form value; anything unknown is the default
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "type" | "text" => Self::Type,
            _ => Self::Upload,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Type => "type",
        }
    }
}

/// The document the user handed in.
///
/// Exactly one input mode is active; selecting a mode discards the other
/// mode's data when the form is decoded.
#[derive(Debug, Clone)]
pub enum DocumentInput {
    /// Upload mode. `None` when no file was picked yet.
    Upload(Option<UploadedFile>),
    /// Type mode with the text area's contents
    Typed(String),
}

impl DocumentInput {
    pub fn mode(&self) -> InputMode {
        match self {
            Self::Upload(_) => InputMode::Upload,
            Self::Typed(_) => InputMode::Type,
        }
    }
}

impl Default for DocumentInput {
    fn default() -> Self {
        Self::Upload(None)
    }
}
