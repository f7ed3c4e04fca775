//! Declaration extraction over partitioned regions.
//!
//! Each pass removes every match of its pattern from the region content and
//! hands back what the capture groups held.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::data::SourcePiece;

static NAMESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\busing\s+namespace\s+([A-Za-z_]\w*(?:::[A-Za-z_]\w*)*)\s*;\s*").unwrap()
});

// Type expression: words, pointers, spaces, template brackets and `::`
// qualifiers, ending right before the alias name.
static TYPEDEF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\btypedef\s+([\w*<>:, \t]*[\w*>])\s*\b([A-Za-z_]\w*)\s*;").unwrap()
});

/// Remove every match of `re` from `text`.
///
/// `capture` maps each match to a value; `None` results are dropped.
/// Removing a match can join its neighbours into a new match, so stripping
/// repeats until the text no longer matches.
pub fn strip_matches<T>(
    re: &Regex,
    text: &str,
    mut capture: impl FnMut(Captures<'_>) -> Option<T>,
) -> (String, Vec<T>) {
    let mut current = text.to_string();
    let mut captured = Vec::new();

    loop {
        let mut stripped = String::with_capacity(current.len());
        let mut last = 0;
        let mut matched = false;

        for caps in re.captures_iter(&current) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            matched = true;
            stripped.push_str(&current[last..whole.start()]);
            last = whole.end();
            captured.extend(capture(caps));
        }

        if !matched {
            return (current, captured);
        }
        stripped.push_str(&current[last..]);
        // Only empty matches: nothing was removed, so another round would loop.
        if stripped.len() == current.len() {
            return (stripped, captured);
        }
        current = stripped;
    }
}

fn strip_pieces<T>(
    re: &Regex,
    pieces: &mut [SourcePiece],
    mut capture: impl FnMut(Captures<'_>) -> Option<T>,
) -> Vec<T> {
    let mut found = Vec::new();
    for piece in pieces.iter_mut() {
        let (stripped, captured) = strip_matches(re, &piece.content, &mut capture);
        piece.content = stripped;
        found.extend(captured);
    }
    found
}

fn group(caps: &Captures<'_>, index: usize) -> Option<String> {
    caps.get(index).map(|m| m.as_str().to_string())
}

/// Include-directive pattern for a given macro mark.
///
/// Matches `<mark>include <path>` and `<mark>include "path"` up to the end
/// of the line. Other directives are left alone even if they contain
/// brackets or quotes.
pub fn dependency_regex(macro_mark: &str) -> Regex {
    let pattern = format!(
        r#"{}[ \t]*include[ \t]*[<"]([^<>"\r\n]+)[>"][ \t]*(?:\r?\n|$)"#,
        regex::escape(macro_mark)
    );
    Regex::new(&pattern).expect("escaped macro mark always yields a valid pattern")
}

/// Strip include directives from `macros`, returning their targets in order.
pub fn extract_dependencies(re: &Regex, macros: &mut [SourcePiece]) -> Vec<String> {
    strip_pieces(re, macros, |caps| group(&caps, 1))
}

/// Strip `using namespace X;` from `sources`, returning the names in order.
pub fn extract_namespaces(sources: &mut [SourcePiece]) -> Vec<String> {
    strip_pieces(&NAMESPACE_REGEX, sources, |caps| group(&caps, 1))
}

/// Strip `typedef T alias;` from `sources`, returning `(alias, T)` pairs.
pub fn extract_typedefs(sources: &mut [SourcePiece]) -> Vec<(String, String)> {
    strip_pieces(&TYPEDEF_REGEX, sources, |caps| {
        let alias = group(&caps, 2)?;
        let ty = caps.get(1)?.as_str().trim().to_string();
        Some((alias, ty))
    })
}
