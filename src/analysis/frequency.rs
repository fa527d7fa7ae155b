//! Word frequency counting
//!
//! Naive tokenizer: lowercase, split on whitespace, drop stopwords. The same
//! counts feed both the frequency table and the cloud layout.

use std::collections::HashMap;

use serde::Serialize;

use super::stopwords::StopwordSet;

/// Number of rows shown in the frequency table
pub const TABLE_ROWS: usize = 20;

/// A word and how often it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// All counted words, sorted by descending count.
///
/// Words with equal counts keep the order in which they first appear in the
/// text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
}

impl FrequencyTable {
    /// The `n` most common words
    pub fn top(&self, n: usize) -> &[WordCount] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Count of one word, 0 when absent
    pub fn count_of(&self, word: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.word == word)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }
}

/// Tokenize `text` and count every token not in `stopwords`
pub fn count_words(text: &str, stopwords: &StopwordSet) -> FrequencyTable {
    let lowered = text.to_lowercase();

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<WordCount> = Vec::new();

    for token in lowered.split_whitespace() {
        if stopwords.contains(token) {
            continue;
        }
        match index.get(token) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(token, entries.len());
                entries.push(WordCount {
                    word: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-occurrence order among ties
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    FrequencyTable { entries }
}
