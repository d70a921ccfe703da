use std::path::PathBuf;

/// What happened to the output file during a generate run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    /// The generated module was written.
    Written,
    /// `--check`: the existing file matches the generated module.
    UpToDate,
    /// `--check`: the file is missing or differs from the generated module.
    Stale,
}

#[derive(Debug)]
pub struct GenerateSummary {
    /// Output path as given on the command line or in the config file.
    pub output: PathBuf,
    pub status: OutputStatus,
    pub languages: Vec<String>,
    pub default_language: Option<String>,
    /// Namespace names with their key counts, in discovery order.
    pub namespaces: Vec<(String, usize)>,
}

impl GenerateSummary {
    pub fn key_count(&self) -> usize {
        self.namespaces.iter().map(|(_, count)| count).sum()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Init(InitSummary),
}

/// Result of running an i18n-typegen command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}
