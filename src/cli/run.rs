use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, generate::generate, init::init},
};
use crate::fs::OsFileSystem;

/// Main entry point for the i18n-typegen CLI.
///
/// Dispatches to `init` or to the default generate command.
///
/// # Returns
/// - `Ok(CommandResult)` describing what was generated or checked
/// - `Err` if the run fails (e.g., missing placeholder, invalid JSON, write error)
pub fn run(Arguments { command, generate: args }: Arguments) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine the working directory")?;

    match command {
        Some(Command::Init) => init(&cwd),
        None => generate(args, &cwd, &OsFileSystem),
    }
}
