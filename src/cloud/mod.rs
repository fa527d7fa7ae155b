//! Word cloud generation
//!
//! - `options`: display parameters (word limit, colours, canvas size)
//! - `layout`: size-weighted placement of single words (no collocations)
//! - `svg`: rendering of a layout as an SVG image
//!
//! The cloud is built from the same [`FrequencyTable`] as the frequency
//! table shown next to it, so both always agree on ranking.

pub mod layout;
pub mod options;
pub mod palette;
pub mod svg;

use serde::Serialize;
use thiserror::Error;

use crate::analysis::FrequencyTable;

pub use layout::{CloudLayout, Orientation, PlacedWord, Rect};
pub use options::{Background, CloudOptions};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CloudError {
    #[error("We need at least 1 word to plot a word cloud, got 0")]
    NoWords,

    #[error("Canvas of {width}x{height} pixels is too small")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("SVG serialization failed: {0}")]
    Svg(String),
}

impl From<quick_xml::Error> for CloudError {
    fn from(err: quick_xml::Error) -> Self {
        CloudError::Svg(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for CloudError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        CloudError::Svg(err.to_string())
    }
}

/// A rendered cloud: the layout plus its SVG image
#[derive(Debug, Clone, Serialize)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    pub background: Background,
    pub svg: String,
    pub words: Vec<PlacedWord>,
}

/// Lay out and render a cloud from counted words
pub fn generate(table: &FrequencyTable, options: &CloudOptions) -> Result<WordCloud, CloudError> {
    let layout = layout::layout(table.entries(), options)?;
    let svg = svg::render(&layout, options.background)?;

    Ok(WordCloud {
        width: layout.width,
        height: layout.height,
        background: options.background,
        svg,
        words: layout.words,
    })
}
