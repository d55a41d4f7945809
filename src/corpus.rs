//! Corpus loading from plain text files.
//!
//! One document per line. Lines are trimmed and blank lines are dropped before
//! they reach the index builder.

use std::fs;
use std::path::Path;

use crate::error::{Result, SchiltronError};

/// Read a corpus file into trimmed, non-blank lines.
///
/// Fails with [`SchiltronError::EmptyCorpus`] if the file holds no
/// non-blank line.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let lines = normalize_lines(&content)?;
    log::debug!("Read {} document lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Trim every line of `text` and drop the blank ones.
pub fn normalize_lines(text: &str) -> Result<Vec<String>> {
    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        return Err(SchiltronError::EmptyCorpus);
    }
    Ok(lines)
}
