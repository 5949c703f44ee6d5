//! Report formatting and printing utilities.
//!
//! Two `Reporter` implementations are provided:
//! - `TerminalReporter`: cargo-style, colored output, one block per directory
//! - `JsonReporter`: a single JSON document for the whole run
//!
//! Both write to any `Write`, so tests can capture their output.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::{
    args::OutputFormat,
    commands::{CheckSummary, CommandResult, CommandSummary, InitSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{BatchReport, BatchStatus, Reporter, RunContext};
use crate::issues::{Issue, Report, Severity};
use crate::rules::check_batch_issues;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

// ============================================================
// Terminal Reporter
// ============================================================

/// Prints each batch as it is reported, then a summary line on `finish`.
pub struct TerminalReporter<W: Write> {
    writer: W,
    error_count: usize,
    warning_count: usize,
    directory_count: usize,
    locale_file_count: usize,
}

impl<W: Write> TerminalReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error_count: 0,
            warning_count: 0,
            directory_count: 0,
            locale_file_count: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn print_issue(&mut self, issue: &Issue) -> io::Result<()> {
        let severity_str = match issue.report_severity() {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };

        writeln!(
            self.writer,
            "{}: \"{}\"  {}",
            severity_str,
            issue.message(),
            issue.report_rule().to_string().dimmed().cyan()
        )?;

        writeln!(self.writer, "  {} {}", "-->".blue(), issue.location().path())?;

        if let Some(details) = issue.details() {
            writeln!(self.writer, "  {} {} {}", "=".blue(), "note:".bold(), details)?;
        }

        if let Some(hint) = issue.hint() {
            writeln!(self.writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint)?;
        }

        writeln!(self.writer)
    }
}

impl<W: Write> Reporter for TerminalReporter<W> {
    fn report(&mut self, _run: &RunContext, batch: &BatchReport) -> Result<()> {
        self.directory_count += 1;
        self.locale_file_count += batch.files.len();

        let issues = check_batch_issues(batch);
        let (missing, warnings): (Vec<&Issue>, Vec<&Issue>) = issues
            .iter()
            .partition(|i| matches!(i, Issue::MissingTranslation(_)));

        for issue in warnings {
            self.print_issue(issue)?;
        }

        if batch.status == BatchStatus::InsufficientLanguages {
            writeln!(
                self.writer,
                "{} {} has fewer than two locale files, nothing to compare\n",
                "note:".bold(),
                batch.parent_dir
            )?;
        }

        if !missing.is_empty() {
            writeln!(
                self.writer,
                "In {} the following entries are missing:",
                batch.parent_dir.bold()
            )?;
            for issue in missing {
                self.print_issue(issue)?;
            }
        }

        for issue in &issues {
            match issue.report_severity() {
                Severity::Error => self.error_count += 1,
                Severity::Warning => self.warning_count += 1,
            }
        }

        Ok(())
    }

    fn finish(&mut self, _run: &RunContext) -> Result<()> {
        let total_problems = self.error_count + self.warning_count;

        if total_problems > 0 {
            writeln!(
                self.writer,
                "{} {} {} ({} {}, {} {})",
                FAILURE_MARK.red(),
                total_problems,
                if total_problems == 1 { "problem" } else { "problems" },
                self.error_count,
                if self.error_count == 1 { "error" } else { "errors" }.red(),
                self.warning_count,
                if self.warning_count == 1 {
                    "warning"
                } else {
                    "warnings"
                }
                .yellow()
            )?;
        } else {
            writeln!(
                self.writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Checked {} {}, {} locale {} - no missing translations",
                    self.directory_count,
                    if self.directory_count == 1 {
                        "directory"
                    } else {
                        "directories"
                    },
                    self.locale_file_count,
                    if self.locale_file_count == 1 { "file" } else { "files" }
                )
                .green()
            )?;
        }

        self.writer.flush()?;
        Ok(())
    }
}

// ============================================================
// JSON Reporter
// ============================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument<'a> {
    #[serde(flatten)]
    run: &'a RunContext,
    batches: &'a [BatchReport],
}

/// Collects every batch and writes one JSON document on `finish`.
pub struct JsonReporter<W: Write> {
    writer: W,
    batches: Vec<BatchReport>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            batches: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, _run: &RunContext, batch: &BatchReport) -> Result<()> {
        self.batches.push(batch.clone());
        Ok(())
    }

    fn finish(&mut self, run: &RunContext) -> Result<()> {
        let document = JsonDocument {
            run,
            batches: &self.batches,
        };
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

// ============================================================
// Command Output
// ============================================================

pub fn print(result: &CommandResult) -> Result<()> {
    match &result.summary {
        CommandSummary::Check(summary) => {
            let stdout = io::stdout().lock();
            match summary.format {
                OutputFormat::Text => print_check(summary, &mut TerminalReporter::new(stdout)),
                OutputFormat::Json => print_check(summary, &mut JsonReporter::new(stdout)),
            }
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
            Ok(())
        }
    }
}

/// Feed every batch of a check to `reporter`, in discovery order.
pub fn print_check(summary: &CheckSummary, reporter: &mut dyn Reporter) -> Result<()> {
    for batch in &summary.batches {
        reporter.report(&summary.run, batch)?;
    }
    reporter.finish(&summary.run)
}

fn print_init(summary: &InitSummary) {
    if let Some(ref error) = summary.error {
        eprintln!("Error: {}", error);
    } else if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
