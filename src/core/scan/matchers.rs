//! Region matchers.
//!
//! Each matcher recognizes one region kind by its introducer token at the
//! cursor and returns the full region. Matchers are stateless apart from the
//! markers copied out of the [`LanguageDescriptor`] and are tried in the
//! order returned by [`Matcher::priority_list`].
//!
//! `floor` is the end of the previously emitted region. Matchers that pull
//! leading indentation into their region never reach below it, so regions
//! never overlap.

use enum_dispatch::enum_dispatch;

use crate::core::{
    LanguageDescriptor, ScanError,
    data::{RegionKind, SourcePiece},
};

pub type MatchResult = Option<Result<SourcePiece, ScanError>>;

#[enum_dispatch]
pub trait RegionMatcher {
    fn kind(&self) -> RegionKind;

    /// `None` when the introducer does not start at `offset`.
    fn try_match(&self, text: &str, offset: usize, floor: usize) -> MatchResult;
}

/// All matchers, dispatched statically.
#[enum_dispatch(RegionMatcher)]
#[derive(Debug, Clone)]
pub enum Matcher {
    MacroMatcher,
    LiteralMatcher,
    LineCommentMatcher,
    BlockCommentMatcher,
}

impl Matcher {
    /// Matchers in the order they are tried at each offset.
    ///
    /// Matchers with an empty introducer are left out; they would match
    /// everywhere.
    pub fn priority_list(lang: &LanguageDescriptor) -> Vec<Matcher> {
        let mut matchers: Vec<Matcher> = Vec::with_capacity(4);
        if !lang.macro_mark.is_empty() {
            matchers.push(MacroMatcher::new(&lang.macro_mark).into());
        }
        if !lang.quote_marks.is_empty() {
            matchers.push(LiteralMatcher::new(&lang.quote_marks).into());
        }
        if !lang.inline_comment_mark.is_empty() {
            matchers.push(LineCommentMatcher::new(&lang.inline_comment_mark).into());
        }
        let block = &lang.block_comment_mark;
        if !block.open.is_empty() && !block.close.is_empty() {
            matchers.push(BlockCommentMatcher::new(&block.open, &block.close).into());
        }
        matchers
    }
}

/// Walk back from `offset` over spaces and tabs, stopping at `floor`.
fn absorb_leading_blanks(text: &str, offset: usize, floor: usize) -> usize {
    let bytes = text.as_bytes();
    let mut start = offset;
    while start > floor && matches!(bytes[start - 1], b' ' | b'\t') {
        start -= 1;
    }
    start
}

// ============================================================
// Macro
// ============================================================

/// Preprocessor directive, up to and including the first newline that is
/// not escaped by a trailing backslash.
#[derive(Debug, Clone)]
pub struct MacroMatcher {
    mark: String,
}

impl MacroMatcher {
    pub fn new(mark: &str) -> Self {
        Self {
            mark: mark.to_string(),
        }
    }
}

impl RegionMatcher for MacroMatcher {
    fn kind(&self) -> RegionKind {
        RegionKind::Macro
    }

    fn try_match(&self, text: &str, offset: usize, floor: usize) -> MatchResult {
        if !text[offset..].starts_with(self.mark.as_str()) {
            return None;
        }

        let start = absorb_leading_blanks(text, offset, floor);
        let bytes = text.as_bytes();
        let mut end = offset + self.mark.len();

        while end < bytes.len() {
            match bytes[end] {
                b'\\' if bytes.get(end + 1) == Some(&b'\n') => {
                    // Continuation: fold the following whitespace run, blank
                    // lines included, into the directive.
                    end += 2;
                    while end < bytes.len() && bytes[end].is_ascii_whitespace() {
                        end += 1;
                    }
                }
                b'\n' => {
                    end += 1;
                    break;
                }
                _ => end += 1,
            }
        }

        Some(Ok(SourcePiece::slice(text, start, end)))
    }
}

// ============================================================
// Literal
// ============================================================

/// String or char literal. The opening quote is also the closing one; a
/// backslash escapes the next character.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    quotes: Vec<char>,
}

impl LiteralMatcher {
    pub fn new(quotes: &[char]) -> Self {
        Self {
            quotes: quotes.to_vec(),
        }
    }
}

impl RegionMatcher for LiteralMatcher {
    fn kind(&self) -> RegionKind {
        RegionKind::Literal
    }

    fn try_match(&self, text: &str, offset: usize, _floor: usize) -> MatchResult {
        let quote = text[offset..]
            .chars()
            .next()
            .filter(|c| self.quotes.contains(c))?;

        let body = offset + quote.len_utf8();
        let mut chars = text[body..].char_indices();
        while let Some((i, c)) = chars.next() {
            if c == '\\' {
                chars.next();
            } else if c == quote {
                let end = body + i + c.len_utf8();
                return Some(Ok(SourcePiece::slice(text, offset, end)));
            }
        }

        Some(Err(ScanError::UnterminatedLiteral { start: offset }))
    }
}

// ============================================================
// Comments
// ============================================================

/// Line comment, up to but excluding the newline. A comment on the last
/// line without a newline runs to end of text.
#[derive(Debug, Clone)]
pub struct LineCommentMatcher {
    mark: String,
}

impl LineCommentMatcher {
    pub fn new(mark: &str) -> Self {
        Self {
            mark: mark.to_string(),
        }
    }
}

impl RegionMatcher for LineCommentMatcher {
    fn kind(&self) -> RegionKind {
        RegionKind::LineComment
    }

    fn try_match(&self, text: &str, offset: usize, _floor: usize) -> MatchResult {
        if !text[offset..].starts_with(self.mark.as_str()) {
            return None;
        }

        let end = text[offset..]
            .find('\n')
            .map_or(text.len(), |pos| offset + pos);
        Some(Ok(SourcePiece::slice(text, offset, end)))
    }
}

/// Block comment. Takes its leading indentation, trailing blanks and the
/// line break(s) after the close token with it, so a comment on its own
/// line leaves no empty line behind.
#[derive(Debug, Clone)]
pub struct BlockCommentMatcher {
    open: String,
    close: String,
}

impl BlockCommentMatcher {
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
        }
    }
}

impl RegionMatcher for BlockCommentMatcher {
    fn kind(&self) -> RegionKind {
        RegionKind::BlockComment
    }

    fn try_match(&self, text: &str, offset: usize, floor: usize) -> MatchResult {
        if !text[offset..].starts_with(self.open.as_str()) {
            return None;
        }

        let start = absorb_leading_blanks(text, offset, floor);
        let body = offset + self.open.len();
        let Some(pos) = text[body..].find(self.close.as_str()) else {
            return Some(Err(ScanError::UnterminatedBlockComment { start: offset }));
        };

        let bytes = text.as_bytes();
        let mut end = body + pos + self.close.len();
        while end < bytes.len() && matches!(bytes[end], b' ' | b'\t') {
            end += 1;
        }
        while end < bytes.len() && matches!(bytes[end], b'\r' | b'\n') {
            end += 1;
        }

        Some(Ok(SourcePiece::slice(text, start, end)))
    }
}
