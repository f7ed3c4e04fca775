//! Language descriptor for the partition scanner.
//!
//! The scanner itself knows nothing about C or C++. Everything it treats as
//! special (macro introducer, quote characters, comment markers) comes from a
//! [`LanguageDescriptor`] passed into every scan.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Open/close token pair for block comments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlockCommentMark {
    pub open: String,
    pub close: String,
}

/// Syntax markers the scanner looks for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDescriptor {
    #[serde(default = "default_macro_mark")]
    pub macro_mark: String,
    #[serde(default = "default_quote_marks")]
    pub quote_marks: Vec<char>,
    #[serde(default = "default_inline_comment_mark")]
    pub inline_comment_mark: String,
    #[serde(default = "default_block_comment_mark")]
    pub block_comment_mark: BlockCommentMark,
}

fn default_macro_mark() -> String {
    "#".to_string()
}

fn default_quote_marks() -> Vec<char> {
    vec!['"', '\'']
}

fn default_inline_comment_mark() -> String {
    "//".to_string()
}

fn default_block_comment_mark() -> BlockCommentMark {
    BlockCommentMark {
        open: "/*".to_string(),
        close: "*/".to_string(),
    }
}

impl LanguageDescriptor {
    /// Markers for C, C++ and friends: `#`, `"`/`'`, `//`, `/* */`.
    pub fn c_family() -> Self {
        Self {
            macro_mark: default_macro_mark(),
            quote_marks: default_quote_marks(),
            inline_comment_mark: default_inline_comment_mark(),
            block_comment_mark: default_block_comment_mark(),
        }
    }

    /// Reject descriptors the scanner cannot make progress with.
    ///
    /// Empty markers would match at every offset.
    pub fn validate(&self) -> Result<()> {
        if self.macro_mark.is_empty() {
            bail!("'language.macroMark' must not be empty");
        }
        if self.inline_comment_mark.is_empty() {
            bail!("'language.inlineCommentMark' must not be empty");
        }
        if self.block_comment_mark.open.is_empty() || self.block_comment_mark.close.is_empty() {
            bail!("'language.blockCommentMark' needs both an open and a close token");
        }
        Ok(())
    }
}

impl Default for LanguageDescriptor {
    fn default() -> Self {
        Self::c_family()
    }
}
