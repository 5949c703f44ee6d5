use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity};

pub fn finish(
    summary: CommandSummary,
    issues: Vec<Issue>,
    directories_checked: usize,
    locale_files_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    if let CommandSummary::Init(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        directories_checked,
        locale_files_checked,
    }
}
