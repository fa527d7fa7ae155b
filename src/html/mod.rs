//! HTML page rendering
//!
//! The page is rendered server side as one string. Every value that came
//! from the user (typed text, file names, stopwords, extracted words) goes
//! through `html_escape` before it reaches the markup.

mod page;

pub use page::{render_page, FormView};
