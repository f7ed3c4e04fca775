//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: List includes, namespaces and typedefs of C/C++ sources
//! - `clean`: Remove build leftovers matching the cleanup patterns
//! - `init`: Initialize csweep configuration file

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
            Some(Command::Scan(args)) => args.common.verbose,
            Some(Command::Clean(args)) => args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to work on
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Only look at the top level of the directory (overrides config file)
    #[arg(long)]
    pub no_recursive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Report malformed files and keep scanning instead of aborting
    #[arg(long)]
    pub keep_going: bool,
}

#[derive(Debug, Args)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually delete files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Do not ask for confirmation before deleting (overrides config file)
    #[arg(short, long)]
    pub force: bool,

    /// Cleanup pattern, replaces the configured patterns.
    /// Can be specified multiple times: --pattern '*.o' --pattern '*.d'
    #[arg(long = "pattern", value_name = "GLOB")]
    pub patterns: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan C/C++ sources and list their includes, namespaces and typedefs
    Scan(ScanArgs),
    /// Remove build leftovers (object files, libraries, backups)
    Clean(CleanArgs),
    /// Initialize a new .csweeprc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn test_parse_scan_defaults() {
        let args = Arguments::try_parse_from(["csweep", "scan"]).unwrap();
        match args.command {
            Some(Command::Scan(scan)) => {
                assert_eq!(scan.common.path, PathBuf::from("."));
                assert_eq!(scan.format, OutputFormat::Text);
                assert!(!scan.keep_going);
                assert!(!scan.common.no_recursive);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_clean_flags() {
        let args = Arguments::try_parse_from([
            "csweep",
            "clean",
            "build",
            "--apply",
            "-f",
            "--pattern",
            "*.o",
            "--pattern",
            "*.d",
            "-v",
        ])
        .unwrap();
        assert!(args.verbose());
        match args.command {
            Some(Command::Clean(clean)) => {
                assert_eq!(clean.common.path, PathBuf::from("build"));
                assert!(clean.apply);
                assert!(clean.force);
                assert_eq!(clean.patterns, vec!["*.o", "*.d"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
