use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, clean::clean, init::init, scan::scan},
};

/// Dispatch the parsed arguments to the matching command handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the summary to report and the error count
/// - `Err` if the command could not run (bad config, malformed file without
///   `--keep-going`, existing config on `init`)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(args)) => scan(args),
        Some(Command::Clean(args)) => clean(args),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
