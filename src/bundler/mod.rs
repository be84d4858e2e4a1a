//! Source bundling
//!
//! This module handles:
//! - Walking the project tree with ignored directories pruned ([`walk`])
//! - Reading each selected file into an explicit result ([`source`])
//! - Writing delimiter blocks to the single bundle file ([`writer`])
//!
//! [`Bundler`] ties the three together. A file that cannot be read never
//! stops the run; only a failure to open or write the bundle does.

pub mod source;
pub mod walk;
pub mod writer;

use std::io::Write;
use std::path::Path;

use crate::config::BundleConfig;
use crate::error::{Result, workspace as workspace_error};
use crate::ui::ProgressReporter;

use source::{SourceRead, read_source};
use walk::discover;
use writer::BundleWriter;

/// Counters for a finished run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BundleSummary {
    /// Delimiter blocks written
    pub files_written: usize,
    /// Blocks that carry the unreadable placeholder
    pub unreadable: usize,
    /// Directories the walk could not enumerate
    pub skipped_dirs: usize,
}

/// Walks a tree and writes the bundle
pub struct Bundler<'a> {
    config: &'a BundleConfig,
}

impl<'a> Bundler<'a> {
    pub fn new(config: &'a BundleConfig) -> Self {
        Self { config }
    }

    /// Bundle `root` into the file at `output_path`
    ///
    /// The output is created (or truncated) only after `root` has been
    /// checked, and it is closed on every return path.
    pub fn bundle_to_file(
        &self,
        root: &Path,
        output_path: &Path,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<BundleSummary> {
        if !root.is_dir() {
            return Err(workspace_error::not_found(root));
        }

        let writer = BundleWriter::create(output_path)?;
        let exclude = dunce::canonicalize(output_path).ok();

        let summary = self.bundle(root, writer, exclude.as_deref(), reporter)?;

        tracing::debug!(
            output = %output_path.display(),
            files = summary.files_written,
            "Bundle written"
        );
        Ok(summary)
    }

    /// Bundle `root` into an already opened writer
    pub fn bundle<W: Write>(
        &self,
        root: &Path,
        mut writer: BundleWriter<W>,
        exclude: Option<&Path>,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<BundleSummary> {
        let discovery = discover(root, self.config, exclude);
        let mut summary = BundleSummary {
            skipped_dirs: discovery.skipped_dirs,
            ..BundleSummary::default()
        };

        for candidate in &discovery.candidates {
            let shown = candidate.display_path.display().to_string();
            reporter.update_file(&shown);

            let read = read_source(&candidate.path);
            if let SourceRead::Unreadable(reason) = &read {
                tracing::debug!(path = %shown, reason = %reason, "Unable to read file");
                summary.unreadable += 1;
            } else {
                tracing::debug!(path = %shown, "Bundling file");
            }

            if let Err(e) = writer.write_block(&candidate.display_path, &read) {
                reporter.abandon();
                return Err(e);
            }
        }

        summary.files_written = writer.blocks();
        if let Err(e) = writer.finish() {
            reporter.abandon();
            return Err(e);
        }
        reporter.finish();

        Ok(summary)
    }
}
