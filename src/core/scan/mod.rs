//! Source-partitioning scanner.
//!
//! ```text
//! text ──▶ partition (matchers, one pass) ──▶ extraction ──▶ SourceItem
//! ```
//!
//! - `matchers`: one matcher per region kind, tried in priority order
//! - `partition`: the single-pass driver
//! - `extract`: include / namespace / typedef extraction
//!
//! [`SourceScanner`] owns the matchers and compiled patterns for one
//! [`LanguageDescriptor`] and is `Sync`, so one instance can be shared by
//! parallel scans.

pub mod extract;
pub mod matchers;
pub mod partition;


use indexmap::{IndexMap, IndexSet};
use regex::Regex;

pub use matchers::{Matcher, RegionMatcher};
pub use partition::Partition;

use super::{LanguageDescriptor, ScanError, SourceItem, data::SourcePiece};

#[derive(Debug, Clone)]
pub struct SourceScanner {
    matchers: Vec<Matcher>,
    dependency_regex: Regex,
}

impl SourceScanner {
    pub fn new(lang: &LanguageDescriptor) -> Self {
        Self {
            matchers: Matcher::priority_list(lang),
            dependency_regex: extract::dependency_regex(&lang.macro_mark),
        }
    }

    /// Split `text` into regions without extracting anything.
    pub fn partition(&self, text: &str) -> Result<Partition, ScanError> {
        partition::partition(text, &self.matchers)
    }

    /// Partition `text`, extract declarations and assemble the result.
    pub fn scan(&self, text: &str) -> Result<SourceItem, ScanError> {
        let Partition {
            mut macros,
            literals,
            comments,
            mut sources,
        } = self.partition(text)?;

        let dependencies = extract::extract_dependencies(&self.dependency_regex, &mut macros);
        let namespaces = extract::extract_namespaces(&mut sources);
        let typedefs = extract::extract_typedefs(&mut sources);

        Ok(SourceItem {
            macros: non_empty(macros),
            sources: non_empty(sources),
            comments: non_empty(comments),
            literals: non_empty(literals),
            dependencies: dedup_names(dependencies),
            namespaces: dedup_names(namespaces),
            typedefs: typedefs.into_iter().collect::<IndexMap<_, _>>(),
        })
    }
}

/// Scan one document with a throwaway [`SourceScanner`].
pub fn scan_source(text: &str, lang: &LanguageDescriptor) -> Result<SourceItem, ScanError> {
    SourceScanner::new(lang).scan(text)
}

fn non_empty(pieces: Vec<SourcePiece>) -> Vec<SourcePiece> {
    pieces.into_iter().filter(|p| !p.is_empty()).collect()
}

fn dedup_names(names: Vec<String>) -> IndexSet<String> {
    names.into_iter().filter(|n| !n.is_empty()).collect()
}
