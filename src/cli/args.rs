//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Compare the locale files of every directory under the locale root
//! - `init`: Write a default `.missingtextrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that read locale files.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Locale root directory (overrides config file)
    #[arg(long)]
    pub locale_root: Option<PathBuf>,

    /// Abort on the first unreadable, malformed or unsupported locale file
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, cargo-style report
    #[default]
    Text,
    /// One JSON document with every batch of the run
    Json,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report translation keys missing from sibling locale files
    Check(CheckCommand),
    /// Initialize a new .missingtextrc.json configuration file
    Init,
}
