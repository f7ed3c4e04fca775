//! Scan failures.

use thiserror::Error;

/// Structural malformations that stop a scan.
///
/// Both carry the byte offset of the opening token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("unterminated literal starting at offset {start}")]
    UnterminatedLiteral { start: usize },

    #[error("unterminated block comment starting at offset {start}")]
    UnterminatedBlockComment { start: usize },
}

impl ScanError {
    pub fn start(&self) -> usize {
        match self {
            Self::UnterminatedLiteral { start } | Self::UnterminatedBlockComment { start } => {
                *start
            }
        }
    }

    /// Short description without the offset, for reports that print a location.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::UnterminatedLiteral { .. } => "unterminated literal",
            Self::UnterminatedBlockComment { .. } => "unterminated block comment",
        }
    }
}

/// 1-based line and column (in chars) of a byte offset.
pub fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(text.len());
    let before = text.get(..offset).unwrap_or(text);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}
