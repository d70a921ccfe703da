//! File parsers for translation files.
//!
//! - `json`: JSON translation file parser and key flattening

pub mod json;
