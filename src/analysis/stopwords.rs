//! Stopword handling
//!
//! The built-in list covers English function words (articles, pronouns,
//! auxiliaries, conjunctions and the most frequent particles). Users extend it
//! with a space-separated list typed into the page.

use std::collections::HashSet;

/// Built-in English stopwords, all lowercase.
///
/// "on" is left out so that it is counted like any other word.
pub const BUILTIN_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few",
    "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "hence", "her", "here", "here's", "hers", "herself",
    "him", "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll", "i'm", "i've",
    "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just", "k", "let's",
    "like", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off",
    "once", "only", "or", "other", "otherwise", "ought", "our", "ours", "ourselves", "out",
    "over", "own", "r", "same", "shall", "shan't", "she", "she'd", "she'll", "she's", "should",
    "shouldn't", "since", "so", "some", "such", "than", "that", "that's", "the", "their",
    "theirs", "them", "themselves", "then", "there", "there's", "therefore", "these", "they",
    "they'd", "they'll", "they're", "they've", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were",
    "weren't", "what", "what's", "when", "when's", "where", "where's", "which", "while", "who",
    "who's", "whom", "why", "why's", "with", "won't", "would", "wouldn't", "www", "yet", "you",
    "you'd", "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

/// Exclusion set: built-in stopwords plus user-supplied ones.
///
/// Membership is exact and case-sensitive. Tokens are lowercased before the
/// lookup, so a user stopword written with capitals never matches.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Only the built-in stopwords
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Built-in stopwords plus `extra`, split on whitespace
    pub fn with_extra(extra: &str) -> Self {
        let mut set = Self::builtin();
        set.words.extend(extra.split_whitespace().map(str::to_string));
        set
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::builtin()
    }
}
