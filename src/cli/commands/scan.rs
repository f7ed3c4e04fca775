use anyhow::{Result, bail};

use super::super::args::ScanArgs;
use super::{CommandResult, CommandSummary, ScanSummary};
use crate::core::ScanContext;

pub fn scan(args: ScanArgs) -> Result<CommandResult> {
    let ctx = ScanContext::new(&args.common)?;
    let files = ctx.scan_sources();

    // Without --keep-going one malformed document fails the whole run.
    if !args.keep_going
        && let Some((path, failure)) = files
            .iter()
            .find_map(|f| f.failure().map(|failure| (&f.path, failure)))
    {
        bail!("{}: {}", path.display(), failure);
    }

    let summary = ScanSummary {
        format: args.format,
        files,
        show_empty: args.common.verbose,
    };
    let error_count = summary.failure_count();

    Ok(CommandResult {
        summary: CommandSummary::Scan(summary),
        error_count,
        exit_on_errors: true,
    })
}
