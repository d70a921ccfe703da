//! Error types for the generation pipeline.
//!
//! Every failure aborts the whole run; nothing is retried or recovered locally.
//! The CLI layer wraps these in `anyhow` and maps them to a non-zero exit status.
//! Display strings omit the cause; print with `{:#}` to include the chain.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed cause used where the underlying error type varies (io, glob patterns).
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    /// The path template or options cannot describe a valid run.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Listing language directories or expanding the namespace glob failed.
    #[error("failed to discover translation files at '{target}'")]
    Discovery {
        target: String,
        #[source]
        source: BoxedCause,
    },

    /// The namespace glob matched no files, e.g. `--lang` names a language
    /// without a directory.
    #[error("no translation files match '{pattern}'")]
    NoTranslationFiles { pattern: String },

    /// A discovered translation file could not be read.
    #[error("failed to read translation file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A translation file is not valid JSON.
    #[error("failed to parse JSON file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The generated module could not be written.
    #[error("failed to write output file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn discovery(target: impl Into<String>, source: impl Into<BoxedCause>) -> Self {
        Self::Discovery {
            target: target.into(),
            source: source.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
