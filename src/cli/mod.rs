//! Command-line interface layer.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "MISSING_TEXT_LOG";

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result)?;

    Ok(ExitStatus::from_result(&result).into())
}

/// Install the stderr log subscriber.
///
/// `MISSING_TEXT_LOG` takes precedence; otherwise only warnings are shown,
/// or debug events with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}
