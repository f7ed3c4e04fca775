//! Report formatting and printing utilities.
//!
//! Kept apart from the scanning engine so csweep can be used as a library.
//! Every printer has a `*_to` variant taking a writer for tests.

use std::io::{self, Write};

use colored::Colorize;
use humansize::{BINARY, format_size};
use serde::Serialize;

use super::{
    actions::{Action, RemoveFile},
    args::OutputFormat,
    commands::{CleanSummary, CommandResult, CommandSummary, InitSummary, ScanSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{FileScan, ScanFailure, SourceItem};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    let mut stdout = io::stdout().lock();
    match &result.summary {
        CommandSummary::Scan(summary) => print_scan_to(summary, &mut stdout),
        CommandSummary::Clean(summary) => print_clean_to(summary, &mut stdout),
        CommandSummary::Init(summary) => print_init_to(summary, &mut stdout),
    }
}

pub fn print_scan_to<W: Write>(summary: &ScanSummary, writer: &mut W) {
    match summary.format {
        OutputFormat::Text => print_scan_text(summary, writer),
        OutputFormat::Json => print_scan_json(summary, writer),
    }
}

fn print_scan_text<W: Write>(summary: &ScanSummary, writer: &mut W) {
    for file in &summary.files {
        match &file.outcome {
            Ok(item) => {
                if item.has_no_declarations() && !summary.show_empty {
                    continue;
                }
                print_item(file, item, writer);
            }
            Err(failure) => print_failure(file, failure, writer),
        }
    }

    let total = summary.files.len();
    let failed = summary.failure_count();
    if failed == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Scanned {} source {}", total, plural(total, "file", "files")).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Scanned {} source {}, {} malformed",
                total,
                plural(total, "file", "files"),
                failed
            )
            .red()
        );
    }
}

fn print_item<W: Write>(file: &FileScan, item: &SourceItem, writer: &mut W) {
    let _ = writeln!(writer, "{}", file.path.display().to_string().bold());
    if !item.dependencies.is_empty() {
        let deps: Vec<&str> = item.dependencies.iter().map(String::as_str).collect();
        let _ = writeln!(writer, "  {} {}", "includes:".cyan(), deps.join(", "));
    }
    if !item.namespaces.is_empty() {
        let names: Vec<&str> = item.namespaces.iter().map(String::as_str).collect();
        let _ = writeln!(writer, "  {} {}", "namespaces:".cyan(), names.join(", "));
    }
    for (alias, ty) in &item.typedefs {
        let _ = writeln!(writer, "  {} {} = {}", "typedef:".cyan(), alias, ty);
    }
}

fn print_failure<W: Write>(file: &FileScan, failure: &ScanFailure, writer: &mut W) {
    match failure {
        ScanFailure::Malformed { error, line, col } => {
            let _ = writeln!(writer, "{}: {}", "error".bold().red(), error);
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                file.path.display(),
                line,
                col
            );
        }
        ScanFailure::Read(_) => {
            let _ = writeln!(writer, "{}: {}", "error".bold().red(), failure);
            let _ = writeln!(writer, "  {} {}", "-->".blue(), file.path.display());
        }
    }
}

#[derive(Serialize)]
struct FileReport<'a> {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(flatten)]
    item: Option<&'a SourceItem>,
}

fn print_scan_json<W: Write>(summary: &ScanSummary, writer: &mut W) {
    let reports: Vec<FileReport> = summary
        .files
        .iter()
        .filter(|f| summary.show_empty || f.item().is_none_or(|i| !i.has_no_declarations()))
        .map(|f| FileReport {
            path: f.path.display().to_string(),
            error: f.failure().map(ToString::to_string),
            item: f.item(),
        })
        .collect();

    match serde_json::to_string_pretty(&reports) {
        Ok(json) => {
            let _ = writeln!(writer, "{}", json);
        }
        Err(err) => eprintln!("{} failed to serialize report: {}", "error:".bold().red(), err),
    }
}

pub fn print_clean_to<W: Write>(summary: &CleanSummary, writer: &mut W) {
    let count = summary.candidates.len();
    if count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No files to clean".green()
        );
        return;
    }

    let total = format_size(summary.total_size(), BINARY);

    if !summary.is_apply {
        RemoveFile::preview_to(&summary.candidates, writer);
        let _ = writeln!(
            writer,
            "{} {} file(s), {} total",
            "Would remove".yellow().bold(),
            count,
            total
        );
        let _ = writeln!(writer, "Run with {} to delete them.", "--apply".cyan());
        return;
    }

    if !summary.confirmed {
        let _ = writeln!(writer, "Aborted, no files removed.");
        return;
    }

    let stats = &summary.stats;
    let _ = writeln!(
        writer,
        "{} {} {} file(s), freed {}",
        SUCCESS_MARK.green(),
        "Removed".green().bold(),
        stats.changes_applied,
        format_size(stats.bytes_freed, BINARY)
    );
    if !stats.failures.is_empty() {
        let _ = writeln!(
            writer,
            "{} Failed to remove {} file(s):",
            FAILURE_MARK.red(),
            stats.failures.len()
        );
        for failure in &stats.failures {
            let _ = writeln!(writer, "  {}: {}", failure.path.display(), failure.error);
        }
    }
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
