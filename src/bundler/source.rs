//! Reading candidate files
//!
//! A read never fails the run. The outcome is captured in [`SourceRead`] and
//! the writer decides what lands in the bundle.

use std::fs;
use std::path::Path;

/// Outcome of reading one candidate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRead {
    /// Full contents, valid UTF-8
    Text(String),
    /// The file could not be opened, read or decoded
    Unreadable(String),
}

/// Read a file as UTF-8 text
pub fn read_source(path: &Path) -> SourceRead {
    match fs::read_to_string(path) {
        Ok(text) => SourceRead::Text(text),
        Err(e) => SourceRead::Unreadable(e.to_string()),
    }
}
