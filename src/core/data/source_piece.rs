use serde::Serialize;

/// Kind of region a matcher recognizes. Plain-code runs carry no kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RegionKind {
    Macro,
    Literal,
    LineComment,
    BlockComment,
}

/// A contiguous span of the scanned text.
///
/// `start` is a byte offset into the original document. `content` starts out
/// as the exact substring; extraction may later replace it with a stripped
/// copy, but `start` is never moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcePiece {
    pub start: usize,
    pub content: String,
}

impl SourcePiece {
    pub fn new(start: usize, content: impl Into<String>) -> Self {
        Self {
            start,
            content: content.into(),
        }
    }

    /// Slice `text[start..end]` into a piece.
    pub fn slice(text: &str, start: usize, end: usize) -> Self {
        Self::new(start, &text[start..end])
    }

    /// Offset just past the piece (valid until the content is stripped).
    pub fn end(&self) -> usize {
        self.start + self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_and_end() {
        let piece = SourcePiece::slice("int x; // hi", 7, 12);
        assert_eq!(piece.start, 7);
        assert_eq!(piece.content, "// hi");
        assert_eq!(piece.end(), 12);
        assert!(!piece.is_empty());
    }
}
