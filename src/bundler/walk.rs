//! Directory traversal for bundle candidates
//!
//! The walk is top-down and deterministic: inside each directory, files come
//! before subdirectories and both are ordered by name. Ignored directories are
//! pruned before descent, so nothing beneath them is ever read. Symlinks are
//! never followed into directories, and only resolve to a candidate when they
//! point at a regular file (or nowhere).

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::BundleConfig;

/// A file selected for the bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Path used to read the file
    pub path: PathBuf,
    /// Path shown in the delimiter, `./` followed by the path under the root
    pub display_path: PathBuf,
}

/// Result of walking a tree
#[derive(Debug, Default)]
pub struct Discovery {
    pub candidates: Vec<Candidate>,
    /// Entries the walk could not enumerate and skipped
    pub skipped_dirs: usize,
}

/// Walk `root` and collect every file the config allows
///
/// `exclude` is the canonical path of the bundle being written; it is never
/// selected even when it sits inside the tree.
pub fn discover(root: &Path, config: &BundleConfig, exclude: Option<&Path>) -> Discovery {
    let mut discovery = Discovery::default();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_entry(|e| !is_pruned(e, config));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                record_walk_error(&err, root, &mut discovery);
                continue;
            }
        };

        if !is_file_like(&entry) || !config.is_allowed(entry.file_name()) {
            continue;
        }

        if is_excluded(&entry, config, exclude) {
            tracing::debug!(path = %entry.path().display(), "Skipping bundle output file");
            continue;
        }

        discovery.candidates.push(Candidate {
            display_path: display_path(root, entry.path()),
            path: entry.into_path(),
        });
    }

    discovery
}

/// Log an entry the walk could not enumerate and count it as skipped
fn record_walk_error(err: &walkdir::Error, root: &Path, discovery: &mut Discovery) {
    let path = err.path().unwrap_or(root);
    tracing::warn!(path = %path.display(), error = %err, "Skipping unreadable directory");
    discovery.skipped_dirs += 1;
}

fn is_pruned(entry: &DirEntry, config: &BundleConfig) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && config.is_ignored_dir(entry.file_name())
}

/// Regular files, plus symlinks to regular files or to nothing
///
/// Symlinks to FIFOs, sockets and devices are rejected: opening them can
/// block forever.
fn is_file_like(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    entry.path_is_symlink() && fs::metadata(entry.path()).map_or(true, |m| m.is_file())
}

fn is_excluded(entry: &DirEntry, config: &BundleConfig, exclude: Option<&Path>) -> bool {
    let Some(exclude) = exclude else {
        return false;
    };
    if entry.file_name() != config.output_file_name.as_str() {
        return false;
    }
    dunce::canonicalize(entry.path()).is_ok_and(|p| p == exclude)
}

fn display_path(root: &Path, path: &Path) -> PathBuf {
    let relative = path.strip_prefix(root).unwrap_or(path);
    Path::new(".").join(relative)
}
