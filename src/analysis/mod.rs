//! Text analysis
//!
//! - `stopwords`: built-in + user stopword set
//! - `frequency`: whitespace tokenizer and word counts
//! - `language`: language identification (informational)

pub mod frequency;
pub mod language;
pub mod stopwords;

pub use frequency::{count_words, FrequencyTable, WordCount, TABLE_ROWS};
pub use language::{detect_language, DetectedLanguage, DetectionError};
pub use stopwords::{StopwordSet, BUILTIN_STOPWORDS};
