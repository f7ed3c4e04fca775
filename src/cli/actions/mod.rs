//! Actions for the cleanup workflow.
//!
//! ```text
//! CleanupCandidate (file found by the walk)
//!     ↓
//! Action (item → Operation conversion)
//!     ↓
//! Operation (low-level file operation)
//!     ↓
//! execute (file removal) or preview (dry-run)
//! ```
//!
//! - [`RemoveFile`]: Delete build leftovers (clean)

mod confirm;
mod operation;
mod remove_file;
mod traits;

pub use confirm::confirm;
pub use remove_file::RemoveFile;
pub use traits::{Action, ActionStats, RemovalFailure};
