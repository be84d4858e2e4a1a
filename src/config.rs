//! Bundle configuration
//!
//! The allow-list of extensions and the ignore-list of directory names are
//! fixed for a run. They are carried as an immutable [`BundleConfig`] value
//! that is handed to the bundler, so tests can substitute their own sets.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Name of the bundle written to the current directory
pub const OUTPUT_FILE_NAME: &str = "PROJECT_FULL_CODE.txt";

/// Extensions bundled by default (leading dot included, case-sensitive)
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[
    ".sol", ".js", ".ts", ".jsx", ".tsx", ".json", ".yml", ".yaml", ".html", ".css", ".scss",
    ".md",
];

/// Directory basenames whose subtrees are never visited
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "build",
    "dist",
    ".next",
    "__pycache__",
];

/// Immutable configuration for a bundling run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    pub allowed_extensions: BTreeSet<String>,
    pub ignored_dirs: BTreeSet<String>,
    pub output_file_name: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: to_set(DEFAULT_ALLOWED_EXTENSIONS),
            ignored_dirs: to_set(DEFAULT_IGNORED_DIRS),
            output_file_name: OUTPUT_FILE_NAME.to_string(),
        }
    }
}

impl BundleConfig {
    /// Replace the allow-list
    #[cfg(test)]
    pub fn with_allowed_extensions(mut self, extensions: &[&str]) -> Self {
        self.allowed_extensions = to_set(extensions);
        self
    }

    /// Replace the ignore-list
    #[cfg(test)]
    pub fn with_ignored_dirs(mut self, dirs: &[&str]) -> Self {
        self.ignored_dirs = to_set(dirs);
        self
    }

    /// Whether a file with this basename should be bundled
    pub fn is_allowed(&self, file_name: &OsStr) -> bool {
        // Non UTF-8 names compare lossily; the extension part is what matters.
        let name = file_name.to_string_lossy();
        self.allowed_extensions.contains(extension_of(&name))
    }

    /// Whether a directory with this basename is pruned from the walk
    pub fn is_ignored_dir(&self, dir_name: &OsStr) -> bool {
        dir_name
            .to_str()
            .is_some_and(|name| self.ignored_dirs.contains(name))
    }

    /// Path of the bundle inside `dir`
    pub fn output_path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.output_file_name)
    }
}

/// Extension of a basename, dot included
///
/// The extension runs from the last `.` to the end of the name. Leading dots
/// never start an extension, so `.eslintrc` has none while `.config.json`
/// has `.json`. A name without an extension yields `""`.
pub fn extension_of(file_name: &str) -> &str {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[stem_start..].rfind('.') {
        Some(idx) => &file_name[stem_start + idx..],
        None => "",
    }
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
