//! Language identification
//!
//! Informational only: the result is shown next to the controls and has no
//! effect on counting or layout.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectionError {
    #[error("No text to detect a language from")]
    EmptyText,

    #[error("Could not determine the language")]
    Undetermined,
}

/// Best guess for the language of a text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedLanguage {
    /// ISO 639-3 code, e.g. `eng` (shown on the page as `EN`)
    pub code: &'static str,
    /// English name, e.g. `English`
    pub name: &'static str,
    pub confidence: f64,
    pub reliable: bool,
}

impl DetectedLanguage {
    /// Upper-cased code as shown on the page: the two-letter ISO 639-1 code
    /// where one exists, the ISO 639-3 code otherwise
    pub fn display_code(&self) -> String {
        iso639_1(self.code).unwrap_or(self.code).to_uppercase()
    }
}

/// Two-letter code for an ISO 639-3 code reported by whatlang
fn iso639_1(code: &str) -> Option<&'static str> {
    let short = match code {
        "afr" => "af",
        "aka" => "ak",
        "amh" => "am",
        "ara" => "ar",
        "aze" => "az",
        "bel" => "be",
        "ben" => "bn",
        "bul" => "bg",
        "cat" => "ca",
        "ces" => "cs",
        "cmn" => "zh",
        "dan" => "da",
        "deu" => "de",
        "ell" => "el",
        "eng" => "en",
        "epo" => "eo",
        "est" => "et",
        "fin" => "fi",
        "fra" => "fr",
        "guj" => "gu",
        "heb" => "he",
        "hin" => "hi",
        "hrv" => "hr",
        "hun" => "hu",
        "hye" => "hy",
        "ind" => "id",
        "ita" => "it",
        "jav" => "jv",
        "jpn" => "ja",
        "kan" => "kn",
        "kat" => "ka",
        "khm" => "km",
        "kor" => "ko",
        "lat" => "la",
        "lav" => "lv",
        "lit" => "lt",
        "mal" => "ml",
        "mar" => "mr",
        "mkd" => "mk",
        "mya" => "my",
        "nep" => "ne",
        "nld" => "nl",
        "nob" => "no",
        "ori" => "or",
        "pan" => "pa",
        "pes" => "fa",
        "pol" => "pl",
        "por" => "pt",
        "ron" => "ro",
        "rus" => "ru",
        "sin" => "si",
        "slk" => "sk",
        "slv" => "sl",
        "sna" => "sn",
        "spa" => "es",
        "srp" => "sr",
        "swe" => "sv",
        "tam" => "ta",
        "tel" => "te",
        "tgl" => "tl",
        "tha" => "th",
        "tuk" => "tk",
        "tur" => "tr",
        "ukr" => "uk",
        "urd" => "ur",
        "uzb" => "uz",
        "vie" => "vi",
        "yid" => "yi",
        "zul" => "zu",
        _ => return None,
    };
    Some(short)
}

/// Detect the language of `text`
pub fn detect_language(text: &str) -> Result<DetectedLanguage, DetectionError> {
    if text.trim().is_empty() {
        return Err(DetectionError::EmptyText);
    }

    let info = whatlang::detect(text).ok_or(DetectionError::Undetermined)?;
    let lang = info.lang();

    Ok(DetectedLanguage {
        code: lang.code(),
        name: lang.eng_name(),
        confidence: info.confidence(),
        reliable: info.is_reliable(),
    })
}
