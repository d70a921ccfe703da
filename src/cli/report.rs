//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow i18n-typegen to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, GenerateSummary, InitSummary, OutputStatus};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the result of a command to stdout (failures to stderr).
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print the result of a command to custom writers.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut W, err: &mut E) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, verbose, out, err),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

/// Print a fatal error, including its cause chain.
pub fn print_error(error: &anyhow::Error) {
    print_error_to(error, &mut io::stderr().lock());
}

pub fn print_error_to<W: Write>(error: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(writer, "{} {:#}", "error:".bold().red(), error);
}

// ============================================================
// Internal Functions
// ============================================================

fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

fn print_generate<W: Write, E: Write>(
    summary: &GenerateSummary,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    let output = summary.output.display();
    let stats = format!(
        "{}, {}, {}",
        plural(summary.namespaces.len(), "namespace", "namespaces"),
        plural(summary.key_count(), "key", "keys"),
        plural(summary.languages.len(), "language", "languages"),
    );

    match summary.status {
        OutputStatus::Written => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Generated {} ({})", output, stats).green()
            );
        }
        OutputStatus::UpToDate => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("{} is up to date ({})", output, stats).green()
            );
        }
        OutputStatus::Stale => {
            let _ = writeln!(
                err,
                "{} {} {}",
                FAILURE_MARK.red(),
                format!("{} is out of date", output).red(),
                format!("(run without {} to regenerate)", "--check".cyan()).dimmed()
            );
        }
    }

    if verbose {
        print_details(summary, out);
    }
}

fn print_details<W: Write>(summary: &GenerateSummary, out: &mut W) {
    if let Some(lang) = &summary.default_language {
        let _ = writeln!(
            out,
            "  {} {} (of {})",
            "default language:".dimmed(),
            lang,
            summary.languages.join(", ")
        );
    }
    let width = summary
        .namespaces
        .iter()
        .map(|(namespace, _)| namespace.len())
        .max()
        .unwrap_or(0);
    for (namespace, count) in &summary.namespaces {
        let _ = writeln!(
            out,
            "  {:<width$}  {}",
            namespace.cyan(),
            plural(*count, "key", "keys").dimmed(),
            width = width
        );
    }
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            err,
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}
