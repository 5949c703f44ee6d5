use crate::{
    cli::args::OutputFormat,
    core::{BatchReport, RunContext},
    issues::Issue,
};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub run: RunContext,
    /// Batch reports in discovery order.
    pub batches: Vec<BatchReport>,
    pub format: OutputFormat,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running missing-text commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of locale directories compared.
    pub directories_checked: usize,
    /// Number of locale files found in those directories.
    pub locale_files_checked: usize,
}
