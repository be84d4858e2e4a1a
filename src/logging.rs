//! Diagnostic logging on stderr
//!
//! `RUST_LOG` takes precedence. Without it, only warnings are shown, or
//! debug output with `--verbose`. Stdout stays reserved for the status line.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global subscriber
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be installed (e.g. by a test harness)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}
