//! Command dispatch.
//!
//! Returns `Err` when a command cannot run at all (invalid config, missing
//! locale root, strict failure); findings are carried in the `CommandResult`.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, init::init},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
