//! Data types produced by the scanner.
//!
//! - `source_piece`: `SourcePiece` regions and their `RegionKind`
//! - `source_item`: `SourceItem`, the per-document aggregate

pub mod source_item;
pub mod source_piece;

pub use source_item::SourceItem;
pub use source_piece::{RegionKind, SourcePiece};
