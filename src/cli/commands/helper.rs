use std::path::{Path, PathBuf};

use crate::{
    cli::args::GenerateArgs,
    config::{CONFIG_FILE_NAME, Config},
    core::{EmitOptions, GenerateOptions},
    error::{Error, Result},
};

/// Command-line flags merged over config file values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub options: GenerateOptions,
    /// Output path as given, for reporting.
    pub output: PathBuf,
    pub check: bool,
}

/// Merge flags over the config file. Relative paths resolve against `cwd`.
pub fn merge_settings(args: GenerateArgs, config: Config, cwd: &Path) -> Result<Settings> {
    let template = args.path.or(config.path).ok_or_else(|| missing_setting("path"))?;
    let output = args
        .output
        .or(config.output.map(PathBuf::from))
        .ok_or_else(|| missing_setting("output"))?;

    let mut emit = EmitOptions::default();
    if let Some(delimiter) = args.delimiter.or(config.delimiter) {
        if delimiter.is_empty() {
            return Err(Error::configuration("delimiter must not be empty"));
        }
        emit.delimiter = delimiter;
    }

    Ok(Settings {
        options: GenerateOptions {
            template,
            base_dir: cwd.to_path_buf(),
            language: args.lang.or(config.lang),
            emit,
        },
        output,
        check: args.check,
    })
}

fn missing_setting(name: &str) -> Error {
    Error::configuration(format!(
        "missing --{name} (or \"{name}\" in {CONFIG_FILE_NAME})"
    ))
}
