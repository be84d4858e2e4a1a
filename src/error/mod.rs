//! Error types and handling for srcbundle
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only failures that make the bundle itself untrustworthy live here. A source
//! file that cannot be read is not an error at this level: it becomes a
//! placeholder block in the output (see [`crate::bundler::source`]).
//!
//! Sub-modules group constructor helpers by error domain:
//! - [`fs`]: output file errors
//! - [`workspace`]: traversal root errors

pub mod fs;
pub mod workspace;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for srcbundle operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundleError {
    // Output errors
    #[error("Failed to open output file '{path}': {reason}")]
    #[diagnostic(
        code(srcbundle::output::open_failed),
        help("Check that the current directory is writable")
    )]
    OutputOpenFailed { path: String, reason: String },

    #[error("Failed to write output file '{path}': {reason}")]
    #[diagnostic(
        code(srcbundle::output::write_failed),
        help("The bundle is incomplete; check free disk space and rerun")
    )]
    OutputWriteFailed { path: String, reason: String },

    // Workspace errors
    #[error("Workspace not found at: {path}")]
    #[diagnostic(
        code(srcbundle::workspace::not_found),
        help("Pass an existing directory with --workspace, or run from inside the project")
    )]
    WorkspaceNotFound { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(srcbundle::fs::io_error))]
    IoError { message: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundleError>;
