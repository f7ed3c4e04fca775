use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use colored::Colorize;
use rayon::prelude::*;
use thiserror::Error;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        ScanError, SourceItem, SourceScanner,
        error::line_col,
        file_scanner::{ScanResult, find_cleanup_candidates, scan_files},
    },
};

/// Why a single file produced no [`SourceItem`].
#[derive(Debug, Error)]
pub enum ScanFailure {
    #[error("failed to read file: {0}")]
    Read(#[from] io::Error),

    #[error("{error} (line {line}, column {col})")]
    Malformed {
        error: ScanError,
        line: usize,
        col: usize,
    },
}

/// Scan outcome for one file.
#[derive(Debug)]
pub struct FileScan {
    pub path: PathBuf,
    pub outcome: Result<SourceItem, ScanFailure>,
}

impl FileScan {
    pub fn item(&self) -> Option<&SourceItem> {
        self.outcome.as_ref().ok()
    }

    pub fn failure(&self) -> Option<&ScanFailure> {
        self.outcome.as_ref().err()
    }
}

/// A file the cleanup workflow would remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupCandidate {
    pub path: PathBuf,
    pub size: u64,
}

/// Configuration plus the directory being worked on.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--no-recursive`)
/// 2. `.csweeprc.json` found from the target directory upwards
/// 3. Built-in defaults
pub struct ScanContext {
    pub config: Config,
    pub root_dir: PathBuf,
    pub verbose: bool,
}

impl ScanContext {
    /// Load configuration for `common.path` and apply CLI overrides.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let verbose = common.verbose;
        let root_dir = common.path.clone();

        if !root_dir.is_dir() {
            bail!("Not a directory: {}", root_dir.display());
        }

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if common.no_recursive {
            config.recursive = false;
        }

        Ok(Self {
            config,
            root_dir,
            verbose,
        })
    }

    /// Create a context from an already-built config (used by tests and library callers).
    pub fn with_config(root_dir: impl Into<PathBuf>, config: Config, verbose: bool) -> Self {
        Self {
            config,
            root_dir: root_dir.into(),
            verbose,
        }
    }

    /// Source files under the root, per `extensions` and `ignores`.
    pub fn source_files(&self) -> ScanResult {
        let result = scan_files(
            &self.root_dir,
            &self.config.extensions,
            &self.config.ignores,
            self.config.recursive,
            self.verbose,
        );
        self.warn_skipped(&result);
        result
    }

    /// Read and scan every source file in parallel.
    ///
    /// Results come back in path order. A malformed file does not stop the
    /// other files from being scanned; callers decide whether to abort.
    pub fn scan_sources(&self) -> Vec<FileScan> {
        let files: Vec<PathBuf> = self.source_files().files.into_iter().collect();
        let scanner = SourceScanner::new(&self.config.language);

        files
            .into_par_iter()
            .map(|path| {
                let outcome = scan_file(&scanner, &path);
                if self.verbose
                    && let Err(failure) = &outcome
                {
                    eprintln!(
                        "{} {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        failure
                    );
                }
                FileScan { path, outcome }
            })
            .collect()
    }

    /// Files matching the cleanup patterns, with their sizes.
    pub fn cleanup_candidates(&self) -> Vec<CleanupCandidate> {
        let result = find_cleanup_candidates(
            &self.root_dir,
            &self.config.patterns,
            &self.config.ignores,
            self.config.recursive,
            self.verbose,
        );
        self.warn_skipped(&result);

        result
            .files
            .into_iter()
            .map(|path| {
                let size = fs::symlink_metadata(&path).map(|m| m.len()).unwrap_or(0);
                CleanupCandidate { path, size }
            })
            .collect()
    }

    fn warn_skipped(&self, result: &ScanResult) {
        if result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                result.skipped_count,
                if self.verbose {
                    ""
                } else {
                    " (use -v for details)"
                }
            );
        }
    }
}

/// Read one file and scan it.
pub fn scan_file(scanner: &SourceScanner, path: &Path) -> Result<SourceItem, ScanFailure> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    scanner.scan(&text).map_err(|error| {
        let (line, col) = line_col(&text, error.start());
        ScanFailure::Malformed { error, line, col }
    })
}
