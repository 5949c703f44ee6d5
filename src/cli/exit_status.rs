use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status of a missing-text invocation.
///
/// - `Success` (0): every compared directory is complete
/// - `Failure` (1): missing translations or other error-severity issues were found
/// - `Error` (2): the run could not finish (config error, strict failure, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        if result.exit_on_errors && result.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
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
