//! Error type tests
//!
//! Tests for BundleError and its constructor helpers.

#![allow(clippy::unwrap_used)]

use std::io;
use std::path::Path;

use miette::Diagnostic;

use crate::error::BundleError;
use crate::error::fs::{io_error, open_failed, write_failed};
use crate::error::workspace::not_found as workspace_not_found;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = BundleError::WorkspaceNotFound {
        path: "/missing".to_string(),
    };
    assert_eq!(err.to_string(), "Workspace not found at: /missing");
}

#[test]
fn test_error_code() {
    let err = open_failed(
        Path::new("PROJECT_FULL_CODE.txt"),
        &io::Error::from(io::ErrorKind::PermissionDenied),
    );
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("srcbundle::output::open_failed".to_string())
    );
}

#[test]
fn test_io_error_variant() {
    let err = io_error("Failed to get current directory: file not found");
    assert!(matches!(err, BundleError::IoError { .. }));
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("srcbundle::fs::io_error".to_string())
    );
}

#[test]
fn test_write_failed_has_help() {
    let err = write_failed(
        Path::new("out.txt"),
        &io::Error::other("disk full"),
    );
    assert!(matches!(err, BundleError::OutputWriteFailed { .. }));
    assert!(err.help().is_some());
}

test_error_contains!(
    test_open_failed_message,
    open_failed(
        Path::new("PROJECT_FULL_CODE.txt"),
        &io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    ),
    "Failed to open output file",
    "PROJECT_FULL_CODE.txt",
    "permission denied"
);

test_error_contains!(
    test_write_failed_message,
    write_failed(
        Path::new("out.txt"),
        &io::Error::other("disk full"),
    ),
    "Failed to write output file",
    "disk full"
);

test_error_contains!(
    test_workspace_not_found_message,
    workspace_not_found(Path::new("/path/to/nowhere")),
    "Workspace not found",
    "/path/to/nowhere"
);

test_error_contains!(test_io_error_message, io_error("some error"), "IO error", "some error");
