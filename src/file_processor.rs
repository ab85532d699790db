//! Read, rewrite, and write back a single file

use crate::formatter;
use crate::rewriter::{Rewrite, Rewriter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fix mode determines whether the file is written and what the caller reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixMode {
    /// Rewrite the file in place
    #[default]
    Fix,
    /// Report whether the file would change, never write
    Check,
    /// Render a diff of the change, never write
    Diff,
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// What happened to one file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub rewrite: Rewrite,
    /// Whether the file on disk was overwritten
    pub written: bool,
    /// Rendered diff, only in [`FixMode::Diff`]
    pub diff: Option<String>,
}

impl FileOutcome {
    pub fn changed(&self) -> bool {
        self.rewrite.changed()
    }
}

pub fn process_file(path: &Path, rewriter: &Rewriter, mode: FixMode) -> Result<FileOutcome, ProcessError> {
    let original = fs::read_to_string(path).map_err(|source| ProcessError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let rewrite = rewriter.rewrite(&original);
    log::debug!(
        "[file_processor] {}: {} block(s) converted",
        path.display(),
        rewrite.conversions.len()
    );
    if let Some(line) = rewrite.unclosed_block {
        log::warn!(
            "{}:{line}: block opened with {} is never closed",
            path.display(),
            rewriter.options().opening_pattern()
        );
    }

    let mut outcome = FileOutcome {
        path: path.to_path_buf(),
        rewrite,
        written: false,
        diff: None,
    };

    match mode {
        FixMode::Fix => {
            // The whole file is rewritten even when nothing changed
            fs::write(path, &outcome.rewrite.content).map_err(|source| ProcessError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            outcome.written = true;
        }
        FixMode::Check => {}
        FixMode::Diff => {
            let display_path = path.display().to_string();
            outcome.diff = Some(formatter::generate_diff(
                &original,
                &outcome.rewrite.content,
                &display_path,
            ));
        }
    }

    Ok(outcome)
}
