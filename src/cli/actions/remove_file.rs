//! RemoveFile action.
//!
//! Deletes build leftovers found by the cleanup walk.
//! Used by the `csweep clean` command.

use super::operation::Operation;
use super::traits::Action;
use crate::core::CleanupCandidate;

pub struct RemoveFile;

impl Action<CleanupCandidate> for RemoveFile {
    fn to_operations(items: &[CleanupCandidate]) -> Vec<Operation> {
        items
            .iter()
            .map(|candidate| Operation::RemoveFile {
                path: candidate.path.clone(),
                size: candidate.size,
            })
            .collect()
    }
}
