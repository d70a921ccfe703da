//! CLI argument definitions using clap.
//!
//! Running without a subcommand generates the types file. The only subcommand
//! is `init`, which writes a starter `.i18ntypesrc.json`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl Arguments {
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Init) => false,
            None => self.generate.verbose,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Path to translations, e.g. "locales/{{lang}}/{{ns}}.json" (overrides config file)
    #[arg(short, long, value_name = "TEMPLATE")]
    pub path: Option<String>,

    /// Path to the generated TypeScript file (overrides config file)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Default language whose files provide the keys (default: first language directory).
    /// The run fails if no translation files exist for it
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Delimiter between namespace and key in namespaced keys [default: ":"]
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Verify the output file is up to date instead of writing it
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .i18ntypesrc.json configuration file
    Init,
}
