use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use super::SourcePiece;

/// Everything the scanner learned about one document.
///
/// Built fresh per document and owns copies of every substring it holds.
/// Sets and maps keep first-seen order so output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceItem {
    pub macros: Vec<SourcePiece>,
    pub sources: Vec<SourcePiece>,
    pub comments: Vec<SourcePiece>,
    pub literals: Vec<SourcePiece>,
    /// Include targets, e.g. `foo/bar.h` from `#include <foo/bar.h>`.
    pub dependencies: IndexSet<String>,
    /// Names from `using namespace X;`.
    pub namespaces: IndexSet<String>,
    /// Alias -> underlying type text.
    pub typedefs: IndexMap<String, String>,
}

impl SourceItem {
    /// True when no dependency, namespace or typedef was extracted.
    pub fn has_no_declarations(&self) -> bool {
        self.dependencies.is_empty() && self.namespaces.is_empty() && self.typedefs.is_empty()
    }
}
