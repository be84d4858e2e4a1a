//! Bundle output stream
//!
//! Each bundled file becomes one delimiter block:
//!
//! ```text
//! \n\n===== FILE: ./path/to/file =====\n\n<contents>
//! ```
//!
//! Contents are written verbatim. An unreadable file gets
//! [`UNREADABLE_PLACEHOLDER`] instead.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::source::SourceRead;
use crate::error::{Result, fs as fs_error};

/// Written in place of contents when a file cannot be read
pub const UNREADABLE_PLACEHOLDER: &str = "[UNABLE TO READ FILE]\n";

/// Render the delimiter line for a file
pub fn delimiter(display_path: &Path) -> String {
    format!("\n\n===== FILE: {} =====\n\n", display_path.display())
}

/// Exclusive, append-only writer for the bundle
pub struct BundleWriter<W: Write> {
    inner: W,
    /// Output location, used in error messages
    path: PathBuf,
    blocks: usize,
}

impl BundleWriter<BufWriter<File>> {
    /// Create (or truncate) the bundle file
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| fs_error::open_failed(path, &e))?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> BundleWriter<W> {
    pub fn new(inner: W, path: &Path) -> Self {
        Self {
            inner,
            path: path.to_path_buf(),
            blocks: 0,
        }
    }

    /// Append one delimiter block
    pub fn write_block(&mut self, display_path: &Path, source: &SourceRead) -> Result<()> {
        let body = match source {
            SourceRead::Text(text) => text.as_str(),
            SourceRead::Unreadable(_) => UNREADABLE_PLACEHOLDER,
        };

        self.inner
            .write_all(delimiter(display_path).as_bytes())
            .and_then(|()| self.inner.write_all(body.as_bytes()))
            .map_err(|e| fs_error::write_failed(&self.path, &e))?;

        self.blocks += 1;
        Ok(())
    }

    /// Number of blocks written so far
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Flush and hand back the underlying stream
    pub fn finish(mut self) -> Result<W> {
        self.inner
            .flush()
            .map_err(|e| fs_error::write_failed(&self.path, &e))?;
        Ok(self.inner)
    }
}
