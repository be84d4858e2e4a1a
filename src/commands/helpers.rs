//! Command helper utilities

use std::path::PathBuf;

use crate::error::{Result, fs as fs_error};

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => current_dir(),
    }
}

/// Current directory, where the bundle is written
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir()
        .map_err(|e| fs_error::io_error(format!("Failed to get current directory: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_explicit_workspace() {
        let path = PathBuf::from("some/project");
        assert_eq!(resolve_workspace_path(Some(path.clone())).unwrap(), path);
    }

    #[test]
    fn test_resolve_defaults_to_current_dir() {
        let resolved = resolve_workspace_path(None).unwrap();
        assert_eq!(resolved, std::env::current_dir().unwrap());
    }
}
