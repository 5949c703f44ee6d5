use anyhow::Result;
use rayon::prelude::*;

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary, helper::finish};
use crate::{
    core::{BatchReport, CheckContext, RunContext},
    issues::Issue,
    rules::check_batch_issues,
};

/// Compare every locale directory under the configured root.
///
/// Batches run in parallel; their reports are kept in discovery order.
/// Any batch error (strict failure or internal inconsistency) aborts
/// the whole run.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let run = RunContext::new(ctx.config.locale_root.clone());

    let directories = ctx.locale_directories()?;
    let coordinator = ctx.coordinator();

    let batches = directories
        .par_iter()
        .map(|directory| coordinator.run(&run, directory))
        .collect::<Result<Vec<BatchReport>, _>>()?;

    let issues: Vec<Issue> = batches.iter().flat_map(check_batch_issues).collect();
    let locale_files_checked = batches.iter().map(|b| b.files.len()).sum();
    let directories_checked = batches.len();

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            run,
            batches,
            format: args.format,
        }),
        issues,
        directories_checked,
        locale_files_checked,
        true,
    ))
}
