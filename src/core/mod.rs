//! Core scanning engine.
//!
//! ## Module Structure
//!
//! - `language`: `LanguageDescriptor`, the markers the scanner looks for
//! - `data`: `SourcePiece` regions and the `SourceItem` aggregate
//! - `scan`: matchers, partition driver and declaration extraction
//! - `error`: `ScanError` for unterminated literals and block comments
//! - `file_scanner`: directory walking for source files and cleanup candidates
//! - `context`: `ScanContext`, config + discovered files + parallel scanning

pub mod context;
pub mod data;
pub mod error;
pub mod file_scanner;
pub mod language;
pub mod scan;

pub use context::{CleanupCandidate, FileScan, ScanContext, ScanFailure};
pub use data::{RegionKind, SourceItem, SourcePiece};
pub use error::{ScanError, line_col};
pub use language::{BlockCommentMark, LanguageDescriptor};
pub use scan::{SourceScanner, scan_source};
