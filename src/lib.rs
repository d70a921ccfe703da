//! i18n-typegen - TypeScript types for namespaced JSON translations
//!
//! Scans a directory tree of JSON translation files organized by language and
//! namespace, flattens each file's nested keys into dotted key paths, and
//! generates a self-contained TypeScript module with `Language` and `Namespace`
//! enums, per-namespace key unions and helper mapping types.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Generation pipeline (resolve, load, emit)
//! - `error`: Error types for the pipeline
//! - `fs`: Filesystem capabilities used by the pipeline
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fs;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use error::{Error, Result};
