use std::process::ExitCode;

/// Exit status for the CLI, following the conventions of code generators
/// that support a `--check` mode.
///
/// - `Success` (0): Output written, or already up to date
/// - `Failure` (1): `--check` found the output missing or stale
/// - `Error` (2): The run failed (configuration, discovery, parse or write error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Output written, or already up to date.
    Success,
    /// `--check` found the output missing or stale.
    Failure,
    /// The run failed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
