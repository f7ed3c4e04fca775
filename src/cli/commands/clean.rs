use std::io;

use anyhow::Result;

use super::super::{
    actions::{Action, ActionStats, RemoveFile, confirm},
    args::CleanArgs,
};
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::core::ScanContext;

pub fn clean(args: CleanArgs) -> Result<CommandResult> {
    let mut ctx = ScanContext::new(&args.common)?;
    if !args.patterns.is_empty() {
        ctx.config.patterns = args.patterns.clone();
        ctx.config.validate()?;
    }
    let force = args.force || ctx.config.force;

    let candidates = ctx.cleanup_candidates();

    let confirmed = if !args.apply || candidates.is_empty() || force {
        true
    } else {
        confirm(
            &format!("Remove {} file(s)?", candidates.len()),
            &mut io::stdin().lock(),
            &mut io::stderr().lock(),
        )?
    };

    let stats = if args.apply && confirmed {
        RemoveFile::run(&candidates)
    } else {
        ActionStats::default()
    };
    let error_count = stats.failures.len();

    Ok(CommandResult {
        summary: CommandSummary::Clean(CleanSummary {
            candidates,
            is_apply: args.apply,
            confirmed,
            stats,
        }),
        error_count,
        exit_on_errors: true,
    })
}
