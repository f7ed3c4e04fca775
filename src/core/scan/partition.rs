//! Single-pass partition of a document into typed regions.

use super::matchers::{Matcher, RegionMatcher};
use crate::core::{
    ScanError,
    data::{RegionKind, SourcePiece},
};

/// Raw scanner output, before extraction and filtering.
///
/// `sources` holds every plain-code run including empty ones and the final
/// trailing run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Partition {
    pub macros: Vec<SourcePiece>,
    pub literals: Vec<SourcePiece>,
    pub comments: Vec<SourcePiece>,
    pub sources: Vec<SourcePiece>,
}

impl Partition {
    fn push(&mut self, kind: RegionKind, piece: SourcePiece) {
        match kind {
            RegionKind::Macro => self.macros.push(piece),
            RegionKind::Literal => self.literals.push(piece),
            RegionKind::LineComment | RegionKind::BlockComment => self.comments.push(piece),
        }
    }

    /// All pieces ordered by start offset.
    pub fn ordered(&self) -> Vec<&SourcePiece> {
        let mut pieces: Vec<&SourcePiece> = self
            .macros
            .iter()
            .chain(&self.literals)
            .chain(&self.comments)
            .chain(&self.sources)
            .collect();
        pieces.sort_by_key(|p| (p.start, p.content.len()));
        pieces
    }

    /// Concatenate all pieces in offset order.
    pub fn reconstruct(&self) -> String {
        self.ordered()
            .into_iter()
            .map(|p| p.content.as_str())
            .collect()
    }
}

/// Walk `text` once, trying `matchers` in order at every offset.
///
/// The first malformed region aborts the scan.
pub fn partition(text: &str, matchers: &[Matcher]) -> Result<Partition, ScanError> {
    let mut partition = Partition::default();
    let mut last_index = 0;
    let mut i = 0;

    while i < text.len() {
        let found = matchers
            .iter()
            .find_map(|m| m.try_match(text, i, last_index).map(|r| (m.kind(), r)));

        match found {
            Some((kind, region)) => {
                let region = region?;
                partition
                    .sources
                    .push(SourcePiece::slice(text, last_index, region.start));
                last_index = region.end();
                partition.push(kind, region);
                i = last_index;
            }
            None => {
                i += text[i..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    partition
        .sources
        .push(SourcePiece::slice(text, last_index, text.len()));

    Ok(partition)
}
