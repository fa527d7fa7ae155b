//! Request pipeline
//!
//! One submission of the page runs [`run`] from scratch: acquire text,
//! detect its language, count words, lay out the cloud. Nothing is kept
//! between runs.

use serde::Serialize;

use crate::analysis::{
    count_words, detect_language, DetectedLanguage, FrequencyTable, StopwordSet, WordCount,
    TABLE_ROWS,
};
use crate::cloud::{self, Background, CloudError, CloudOptions, WordCloud};
use crate::document::DocumentInput;
use crate::formats;
use crate::notice::Notice;

/// Prompt shown while there is no text to work with
pub const EMPTY_INPUT_PROMPT: &str = "Please upload a file or enter some text to begin.";

/// Warning shown when language identification fails
pub const LANGUAGE_WARNING: &str = "Could not detect language.";

/// Display parameters chosen on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    pub max_words: usize,
    pub background: Background,
    pub width: u32,
    pub height: u32,
    /// Space-separated stopwords added to the built-in list
    pub extra_stopwords: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let cloud = CloudOptions::default();
        Self {
            max_words: cloud.max_words,
            background: cloud.background,
            width: cloud.width,
            height: cloud.height,
            extra_stopwords: String::new(),
        }
    }
}

impl RenderConfig {
    /// Cloud options, clamped into the ranges the page offers
    pub fn cloud_options(&self) -> CloudOptions {
        CloudOptions {
            max_words: self.max_words,
            background: self.background,
            width: self.width,
            height: self.height,
        }
        .clamped()
    }

    pub fn stopwords(&self) -> StopwordSet {
        StopwordSet::with_extra(&self.extra_stopwords)
    }
}

/// Everything one run produces for the page
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineOutput {
    pub notices: Vec<Notice>,
    pub language: Option<DetectedLanguage>,
    pub cloud: Option<WordCloud>,
    /// Top rows of the frequency table
    pub table: Option<Vec<WordCount>>,
}

impl PipelineOutput {
    /// True when there was text to visualise
    pub fn has_results(&self) -> bool {
        self.cloud.is_some()
    }
}

/// Run the whole pipeline for one input snapshot.
///
/// Extraction and language detection failures become notices. A failure to
/// build the cloud is returned as an error.
pub fn run(input: &DocumentInput, config: &RenderConfig) -> Result<PipelineOutput, CloudError> {
    let mut output = PipelineOutput::default();

    let raw_text = match input {
        DocumentInput::Typed(text) => text.clone(),
        DocumentInput::Upload(Some(file)) => {
            tracing::debug!(
                file_name = %file.file_name,
                format = file.format.label(),
                bytes = file.bytes.len(),
                "Extracting upload"
            );
            let extraction = formats::extract_text(file.format, &file.bytes);
            output.notices.extend(extraction.notice);
            extraction.text
        }
        DocumentInput::Upload(None) => String::new(),
    };

    if !raw_text.is_empty() {
        match detect_language(&raw_text) {
            Ok(language) => output.language = Some(language),
            Err(e) => {
                tracing::debug!(error = %e, "Language detection failed");
                output.notices.push(Notice::warning(LANGUAGE_WARNING));
            }
        }
    }

    if raw_text.trim().is_empty() {
        output.notices.push(Notice::info(EMPTY_INPUT_PROMPT));
        return Ok(output);
    }

    let stopwords = config.stopwords();
    let table = count_words(&raw_text, &stopwords);
    output.cloud = Some(cloud::generate(&table, &config.cloud_options())?);
    output.table = Some(top_rows(&table));

    Ok(output)
}

fn top_rows(table: &FrequencyTable) -> Vec<WordCount> {
    table.top(TABLE_ROWS).to_vec()
}
