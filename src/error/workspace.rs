//! Workspace errors

use std::path::Path;

use super::BundleError;

/// Creates a workspace not found error
pub fn not_found(path: &Path) -> BundleError {
    BundleError::WorkspaceNotFound {
        path: path.display().to_string(),
    }
}
