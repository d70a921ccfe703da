//! Core generation engine (three-phase pipeline).
//!
//! 1. `resolve`: expand the path template into languages and namespace files
//! 2. `loader`: read each namespace file and flatten it into key paths
//! 3. `emit`: render the TypeScript module
//!
//! The pipeline never writes; the CLI decides whether to write the result or
//! compare it against an existing file.
//!
//! ## Module Structure
//!
//! - `parsers`: JSON parsing and key flattening
//! - `resolve`: Path template resolution
//! - `loader`: Namespace file loading
//! - `emit`: TypeScript output

pub mod emit;
pub mod loader;
pub mod parsers;
pub mod resolve;

pub use emit::{DEFAULT_DELIMITER, EmitOptions, MAX_PICK_ARITY, check_identifiers, emit};
pub use loader::{NamespaceMap, load};
pub use resolve::{ResolvedPaths, TranslationFile, resolve};

use std::path::PathBuf;

use crate::{error::Result, fs::FileSystem};

/// Inputs of a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Path template containing `{{ns}}` and optionally `{{lang}}`.
    pub template: String,
    /// Directory a relative template is resolved against.
    pub base_dir: PathBuf,
    /// Explicit default language, overriding the first discovered one.
    pub language: Option<String>,
    pub emit: EmitOptions,
}

/// Everything produced by a run, kept for reporting.
#[derive(Debug, Clone)]
pub struct Generation {
    pub resolved: ResolvedPaths,
    pub namespaces: NamespaceMap,
    pub output: String,
}

impl Generation {
    pub fn key_count(&self) -> usize {
        self.namespaces.values().map(Vec::len).sum()
    }
}

/// Run resolve → load → emit.
pub fn generate(options: &GenerateOptions, fs: &dyn FileSystem) -> Result<Generation> {
    let resolved = resolve(
        &options.template,
        options.language.as_deref(),
        &options.base_dir,
        fs,
    )?;
    let namespaces = load(&resolved.files, fs)?;
    check_identifiers(&resolved.languages, &namespaces)?;
    let output = emit(&resolved.languages, &namespaces, &options.emit);

    Ok(Generation {
        resolved,
        namespaces,
        output,
    })
}
