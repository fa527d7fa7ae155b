//! Display parameters for the word cloud

use serde::{Deserialize, Serialize};

pub const MAX_WORDS_RANGE: (usize, usize) = (50, 500);
pub const WIDTH_RANGE: (u32, u32) = (300, 1000);
pub const HEIGHT_RANGE: (u32, u32) = (300, 800);

pub const DEFAULT_MAX_WORDS: usize = 150;
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 400;

/// Background colours offered on the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    #[default]
    White,
    Black,
    LightBlue,
    LightGrey,
}

impl Background {
    pub const ALL: [Background; 4] = [
        Background::White,
        Background::Black,
        Background::LightBlue,
        Background::LightGrey,
    ];

    /// CSS colour name, also the form value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::LightBlue => "lightblue",
            Self::LightGrey => "lightgrey",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Size and count limits of one cloud
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CloudOptions {
    pub max_words: usize,
    pub background: Background,
    pub width: u32,
    pub height: u32,
}

impl Default for CloudOptions {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            background: Background::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl CloudOptions {
    /// Same options with every number pulled into its allowed range
    pub fn clamped(self) -> Self {
        Self {
            max_words: self.max_words.clamp(MAX_WORDS_RANGE.0, MAX_WORDS_RANGE.1),
            background: self.background,
            width: self.width.clamp(WIDTH_RANGE.0, WIDTH_RANGE.1),
            height: self.height.clamp(HEIGHT_RANGE.0, HEIGHT_RANGE.1),
        }
    }
}
