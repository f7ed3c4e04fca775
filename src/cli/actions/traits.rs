//! Action trait definition.
//!
//! Actions convert items into Operations. Each Action can be implemented
//! for multiple item types.

use std::{io::Write, path::PathBuf};

use colored::Colorize;

use super::operation::Operation;

/// A single operation that could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Statistics from running an action.
#[derive(Debug, Clone, Default)]
pub struct ActionStats {
    /// Number of changes actually applied.
    pub changes_applied: usize,
    /// Bytes released by applied changes.
    pub bytes_freed: u64,
    pub failures: Vec<RemovalFailure>,
}

/// Action trait - converts items into Operations and executes them.
///
/// # Example
///
/// ```ignore
/// if apply {
///     RemoveFile::run(&candidates);
/// } else {
///     RemoveFile::preview_to(&candidates, &mut io::stdout());
/// }
/// ```
pub trait Action<I> {
    /// Convert items to low-level operations.
    ///
    /// This is the only method that must be implemented.
    fn to_operations(items: &[I]) -> Vec<Operation>;

    /// Execute the action. Failed operations are recorded and skipped.
    fn run(items: &[I]) -> ActionStats {
        let ops = Self::to_operations(items);
        execute_operations(&ops)
    }

    /// Preview the action (dry-run mode).
    fn preview_to<W: Write>(items: &[I], writer: &mut W) {
        for op in Self::to_operations(items) {
            op.preview_to(writer);
        }
    }
}

fn execute_operations(ops: &[Operation]) -> ActionStats {
    let mut stats = ActionStats::default();

    for op in ops {
        match op.execute() {
            Ok(()) => {
                stats.changes_applied += 1;
                stats.bytes_freed += op.freed_bytes();
            }
            Err(err) => {
                eprintln!(
                    "{} could not remove {}: {}",
                    "warning:".bold().yellow(),
                    op.path().display(),
                    err
                );
                stats.failures.push(RemovalFailure {
                    path: op.path().clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    stats
}
