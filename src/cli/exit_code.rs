use super::commands::{CommandResult, CommandSummary, OutputStatus};
use super::exit_status::ExitStatus;

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    match &result.summary {
        CommandSummary::Generate(summary) if summary.status == OutputStatus::Stale => {
            ExitStatus::Failure
        }
        CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
        _ => ExitStatus::Success,
    }
}
