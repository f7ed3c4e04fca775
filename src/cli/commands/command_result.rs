use super::super::{actions::ActionStats, args::OutputFormat};
use crate::core::{CleanupCandidate, FileScan};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub format: OutputFormat,
    /// Per-file results in path order.
    pub files: Vec<FileScan>,
    /// Print files that have nothing to show (verbose mode).
    pub show_empty: bool,
}

impl ScanSummary {
    pub fn failure_count(&self) -> usize {
        self.files.iter().filter(|f| f.failure().is_some()).count()
    }
}

#[derive(Debug)]
pub struct CleanSummary {
    pub candidates: Vec<CleanupCandidate>,
    pub is_apply: bool,
    /// False when the user declined the confirmation prompt.
    pub confirmed: bool,
    pub stats: ActionStats,
}

impl CleanSummary {
    pub fn total_size(&self) -> u64 {
        self.candidates.iter().map(|c| c.size).sum()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running csweep commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
}
