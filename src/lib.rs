//! csweep - C/C++ source scanner and build-leftover cleaner
//!
//! csweep partitions C-family source text into macro, literal, comment and
//! plain-source regions, then extracts include dependencies, `using
//! namespace` declarations and typedef aliases. The same directory walker
//! also finds build leftovers for cleanup.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and actions)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanning engine and file discovery
//!
//! ## Example
//!
//! ```
//! use csweep::core::{LanguageDescriptor, scan_source};
//!
//! let item = scan_source("#include <vector>\n", &LanguageDescriptor::default()).unwrap();
//! assert!(item.dependencies.contains("vector"));
//! ```

pub mod cli;
pub mod config;
pub mod core;
