use std::{
    fs, io,
    io::Write,
    path::PathBuf,
};

use colored::Colorize;
use humansize::{BINARY, format_size};

/// Low-level file operation produced by an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    RemoveFile { path: PathBuf, size: u64 },
}

impl Operation {
    /// Describe the operation without performing it.
    pub fn preview_to<W: Write>(&self, writer: &mut W) {
        match self {
            Operation::RemoveFile { path, size } => {
                let _ = writeln!(
                    writer,
                    "{} {} ({})",
                    "Would remove:".yellow(),
                    path.display(),
                    format_size(*size, BINARY)
                );
            }
        }
    }

    pub fn execute(&self) -> io::Result<()> {
        match self {
            Operation::RemoveFile { path, .. } => fs::remove_file(path),
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Operation::RemoveFile { path, .. } => path,
        }
    }

    /// Bytes released when the operation succeeds.
    pub fn freed_bytes(&self) -> u64 {
        match self {
            Operation::RemoveFile { size, .. } => *size,
        }
    }
}
