//! Common test utilities for srcbundle integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the bundle the binary writes
pub const OUTPUT: &str = "PROJECT_FULL_CODE.txt";

/// A temporary project tree for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        self.write_bytes(path, content.as_bytes());
    }

    /// Write raw bytes in workspace
    pub fn write_bytes(&self, path: &str, content: &[u8]) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Read the bundle written into the workspace
    pub fn read_bundle(&self) -> String {
        self.read_file(OUTPUT)
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// srcbundle command running inside `dir`, isolated from the caller's environment
#[allow(deprecated)]
pub fn srcbundle_cmd_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("srcbundle").expect("Failed to find srcbundle binary");
    cmd.current_dir(dir)
        .env_remove("SRCBUNDLE_WORKSPACE")
        .env_remove("RUST_LOG")
        .arg("--quiet");
    cmd
}

/// Paths of every delimiter block in a bundle, in order
pub fn block_paths(bundle: &str) -> Vec<String> {
    bundle
        .lines()
        .filter_map(|line| {
            line.strip_prefix("===== FILE: ")
                .and_then(|rest| rest.strip_suffix(" ====="))
        })
        .map(|path| path.replace('\\', "/"))
        .collect()
}
