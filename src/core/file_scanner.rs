use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Version-control metadata directories, never walked.
const VCS_DIRS: &[&str] = &[".git", ".hg", ".svn"];

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths relative to the base directory.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of walking a directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: BTreeSet<PathBuf>,
    pub skipped_count: usize,
}

/// User ignores, split into literal path prefixes and glob patterns.
struct IgnoreFilter {
    literal_paths: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreFilter {
    fn new(base_dir: &Path, ignores: &[String], verbose: bool) -> Self {
        let mut literal_paths = Vec::new();
        let mut globs = Vec::new();

        for p in ignores {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => globs.push(pattern),
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid ignore pattern '{}': {}",
                                "warning:".bold().yellow(),
                                p,
                                e
                            );
                        }
                    }
                }
            } else {
                literal_paths.push(base_dir.join(p));
            }
        }

        Self {
            literal_paths,
            globs,
        }
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        let path = entry.path();

        if entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| VCS_DIRS.contains(&name))
        {
            return true;
        }

        if self.literal_paths.iter().any(|p| path.starts_with(p)) {
            return true;
        }

        let path_str = path.to_string_lossy();
        self.globs.iter().any(|p| p.matches(&path_str))
    }
}

/// Walk `base_dir` and keep every file accepted by `keep`.
fn walk(
    base_dir: &Path,
    ignores: &[String],
    recursive: bool,
    verbose: bool,
    keep: impl Fn(&Path) -> bool,
) -> ScanResult {
    let filter = IgnoreFilter::new(base_dir, ignores, verbose);
    let mut result = ScanResult::default();

    let mut walker = WalkDir::new(base_dir);
    if !recursive {
        walker = walker.max_depth(1);
    }

    for entry in walker.into_iter().filter_entry(|e| !filter.is_ignored(e)) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && keep(path) {
            result.files.insert(path.to_path_buf());
        }
    }

    result
}

/// Find C/C++ source files under `base_dir`.
pub fn scan_files(
    base_dir: &Path,
    extensions: &[String],
    ignores: &[String],
    recursive: bool,
    verbose: bool,
) -> ScanResult {
    walk(base_dir, ignores, recursive, verbose, |path| {
        has_extension(path, extensions)
    })
}

/// Find files whose name matches one of the cleanup `patterns`.
pub fn find_cleanup_candidates(
    base_dir: &Path,
    patterns: &[String],
    ignores: &[String],
    recursive: bool,
    verbose: bool,
) -> ScanResult {
    let patterns: Vec<Pattern> = patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid cleanup pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect();

    walk(base_dir, ignores, recursive, verbose, |path| {
        matches_file_name(path, &patterns)
    })
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
}

fn matches_file_name(path: &Path, patterns: &[Pattern]) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| patterns.iter().any(|p| p.matches(name)))
}
