//! Form decoding
//!
//! Turns a `multipart/form-data` submission of the page (or an API call using
//! the same field names) into a [`Submission`].
//!
//! Fields:
//! - `mode`: `upload` | `type`
//! - `file`: the uploaded document
//! - `text`: the text area
//! - `max_words`, `background`, `width`, `height`, `stopwords`: display settings

use axum::body::Bytes;
use axum::extract::Multipart;

use crate::cloud::Background;
use crate::document::{DocumentFormat, DocumentInput, InputMode, UploadedFile};
use crate::error::{AppError, Result};
use crate::pipeline::RenderConfig;

/// A file part as received
#[derive(Debug, Clone, Default)]
pub struct RawFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Form fields as received, before validation
#[derive(Debug, Clone, Default)]
pub struct RawForm {
    pub mode: Option<String>,
    pub text: Option<String>,
    pub file: Option<RawFile>,
    pub max_words: Option<String>,
    pub background: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub stopwords: Option<String>,
}

/// A decoded page submission
#[derive(Debug, Clone)]
pub struct Submission {
    pub input: DocumentInput,
    pub config: RenderConfig,
    /// Content type (or file name) of an upload that is neither PDF nor DOCX
    pub rejected_upload: Option<String>,
}

impl Submission {
    /// Text to put back into the text area
    pub fn typed_text(&self) -> &str {
        match &self.input {
            DocumentInput::Typed(text) => text,
            DocumentInput::Upload(_) => "",
        }
    }

    /// Name of the accepted upload, if any
    pub fn file_name(&self) -> Option<&str> {
        match &self.input {
            DocumentInput::Upload(Some(file)) => Some(&file.file_name),
            _ => None,
        }
    }
}

/// Read every field of a multipart body
pub async fn read_multipart(mut multipart: Multipart) -> Result<RawForm> {
    let mut form = RawForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                form.file = Some(RawFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            "mode" => form.mode = Some(field.text().await?),
            "text" => form.text = Some(field.text().await?),
            "max_words" => form.max_words = Some(field.text().await?),
            "background" => form.background = Some(field.text().await?),
            "width" => form.width = Some(field.text().await?),
            "height" => form.height = Some(field.text().await?),
            "stopwords" => form.stopwords = Some(field.text().await?),
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    Ok(form)
}

/// Validate a raw form into a submission
pub fn decode(form: RawForm) -> Result<Submission> {
    let defaults = RenderConfig::default();
    let config = RenderConfig {
        max_words: parse_number(form.max_words.as_deref(), "max_words", defaults.max_words)?,
        background: form
            .background
            .as_deref()
            .and_then(Background::parse)
            .unwrap_or(defaults.background),
        width: parse_number(form.width.as_deref(), "width", defaults.width)?,
        height: parse_number(form.height.as_deref(), "height", defaults.height)?,
        extra_stopwords: form.stopwords.unwrap_or_default(),
    };

    let file = form.file.filter(|f| !is_empty_file_part(f));
    let mode = match form.mode.as_deref() {
        Some(mode) => InputMode::parse(mode),
        // API callers may leave the selector out
        None if file.is_none() && form.text.is_some() => InputMode::Type,
        None => InputMode::Upload,
    };

    let mut rejected_upload = None;
    let input = match mode {
        InputMode::Type => DocumentInput::Typed(form.text.unwrap_or_default()),
        InputMode::Upload => match file {
            None => DocumentInput::Upload(None),
            Some(file) => {
                let format =
                    DocumentFormat::from_upload(file.content_type.as_deref(), file.file_name.as_deref());
                match format {
                    Some(format) => DocumentInput::Upload(Some(UploadedFile {
                        file_name: file.file_name.unwrap_or_default(),
                        format,
                        bytes: file.bytes.to_vec(),
                    })),
                    None => {
                        let declared = file
                            .content_type
                            .or(file.file_name)
                            .unwrap_or_else(|| "unknown".to_string());
                        tracing::info!(declared = %declared, "Rejected upload of unsupported type");
                        rejected_upload = Some(declared);
                        DocumentInput::Upload(None)
                    }
                }
            }
        },
    };

    Ok(Submission {
        input,
        config,
        rejected_upload,
    })
}

/// Browsers send an empty, nameless file part when nothing was picked
fn is_empty_file_part(file: &RawFile) -> bool {
    file.bytes.is_empty() && file.file_name.as_deref().unwrap_or_default().is_empty()
}

fn parse_number<T: std::str::FromStr>(value: Option<&str>, name: &str, default: T) -> Result<T> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v
            .parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid value for {}: {}", name, v))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DOCX_MIME, PDF_MIME};

    fn file(name: &str, content_type: &str, bytes: &'static [u8]) -> Option<RawFile> {
        Some(RawFile {
            file_name: Some(name.to_string()),
            content_type: Some(content_type.to_string()),
            bytes: Bytes::from_static(bytes),
        })
    }

    #[test]
    fn test_defaults() {
        let submission = decode(RawForm::default()).unwrap();
        assert_eq!(submission.config, RenderConfig::default());
        assert!(matches!(submission.input, DocumentInput::Upload(None)));
        assert!(submission.rejected_upload.is_none());
    }

    #[test]
    fn test_type_mode_discards_file() {
        let form = RawForm {
            mode: Some("type".into()),
            text: Some("hello world".into()),
            file: file("a.pdf", PDF_MIME, b"%PDF"),
            ..RawForm::default()
        };
        let submission = decode(form).unwrap();
        assert!(matches!(&submission.input, DocumentInput::Typed(t) if t == "hello world"));
        assert_eq!(submission.typed_text(), "hello world");
        assert_eq!(submission.file_name(), None);
    }

    #[test]
    fn test_upload_mode_discards_text() {
        let form = RawForm {
            mode: Some("upload".into()),
            text: Some("ignored".into()),
            file: file("notes.docx", DOCX_MIME, b"PK"),
            ..RawForm::default()
        };
        let submission = decode(form).unwrap();
        match &submission.input {
            DocumentInput::Upload(Some(upload)) => {
                assert_eq!(upload.format, DocumentFormat::Docx);
                assert_eq!(upload.file_name, "notes.docx");
                assert_eq!(upload.bytes, b"PK");
            }
            other => panic!("unexpected input {:?}", other),
        }
        assert_eq!(submission.typed_text(), "");
        assert_eq!(submission.file_name(), Some("notes.docx"));
    }

    #[test]
    fn test_unsupported_upload_is_rejected() {
        let form = RawForm {
            mode: Some("upload".into()),
            file: file("photo.png", "image/png", b"\x89PNG"),
            ..RawForm::default()
        };
        let submission = decode(form).unwrap();
        assert!(matches!(submission.input, DocumentInput::Upload(None)));
        assert_eq!(submission.rejected_upload.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_empty_file_part_means_no_file() {
        let form = RawForm {
            mode: Some("upload".into()),
            file: Some(RawFile {
                file_name: Some(String::new()),
                content_type: Some("application/octet-stream".into()),
                bytes: Bytes::new(),
            }),
            ..RawForm::default()
        };
        let submission = decode(form).unwrap();
        assert!(matches!(submission.input, DocumentInput::Upload(None)));
        assert!(submission.rejected_upload.is_none());
    }

    #[test]
    fn test_missing_mode_infers_type_from_text() {
        let form = RawForm {
            text: Some("some words".into()),
            ..RawForm::default()
        };
        let submission = decode(form).unwrap();
        assert_eq!(submission.input.mode(), InputMode::Type);
    }

    #[test]
    fn test_settings() {
        let form = RawForm {
            max_words: Some("200".into()),
            background: Some("black".into()),
            width: Some("640".into()),
            height: Some("".into()),
            stopwords: Some("foo bar".into()),
            ..RawForm::default()
        };
        let config = decode(form).unwrap().config;
        assert_eq!(config.max_words, 200);
        assert_eq!(config.background, Background::Black);
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 400);
        assert_eq!(config.extra_stopwords, "foo bar");
    }

    #[test]
    fn test_unknown_background_falls_back() {
        let form = RawForm {
            background: Some("hotpink".into()),
            ..RawForm::default()
        };
        assert_eq!(decode(form).unwrap().config.background, Background::White);
    }

    #[test]
    fn test_invalid_number_is_bad_request() {
        let form = RawForm {
            width: Some("wide".into()),
            ..RawForm::default()
        };
        assert!(matches!(decode(form), Err(AppError::BadRequest(_))));
    }
}
