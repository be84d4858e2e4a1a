//! Output file errors

use std::path::Path;

use super::BundleError;

/// Creates an output open error
pub fn open_failed(path: &Path, err: &std::io::Error) -> BundleError {
    BundleError::OutputOpenFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an output write error
pub fn write_failed(path: &Path, err: &std::io::Error) -> BundleError {
    BundleError::OutputWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> BundleError {
    BundleError::IoError {
        message: message.into(),
    }
}
