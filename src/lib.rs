//! Word Cloud Server Library
//!
//! Turns an uploaded PDF/DOCX document or typed text into a word cloud and a
//! word frequency table. The server binary is in main.rs.
//!
//! # Modules
//!
//! - `document`: input model (upload vs. typed text) and format detection
//! - `formats`: PDF and DOCX text extraction
//! - `analysis`: stopwords, word counts, language identification
//! - `cloud`: word cloud layout and SVG rendering
//! - `pipeline`: one run from input to results
//! - `html`, `routes`: the page and the HTTP API

pub mod analysis;
pub mod cloud;
pub mod config;
pub mod document;
pub mod error;
pub mod formats;
pub mod html;
pub mod notice;
pub mod pipeline;
pub mod routes;
pub mod state;
