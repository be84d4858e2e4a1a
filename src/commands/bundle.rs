//! Bundle command implementation
//!
//! Walks the workspace, writes `PROJECT_FULL_CODE.txt` into the current
//! directory and prints one confirmation line.

use console::Style;

use crate::bundler::{BundleSummary, Bundler};
use crate::cli::Cli;
use crate::commands::helpers::{current_dir, resolve_workspace_path};
use crate::config::BundleConfig;
use crate::error::Result;
use crate::ui::{InteractiveProgressReporter, ProgressReporter, SilentProgressReporter};

/// Run bundle command
pub fn run(cli: Cli) -> Result<()> {
    let root = resolve_workspace_path(cli.workspace)?;
    let config = BundleConfig::default();
    let output_path = config.output_path_in(&current_dir()?);

    let mut reporter: Box<dyn ProgressReporter> = if cli.quiet {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::default())
    };

    tracing::debug!(
        root = %root.display(),
        output = %output_path.display(),
        "Bundling workspace"
    );

    let summary = Bundler::new(&config).bundle_to_file(&root, &output_path, reporter.as_mut())?;

    println!("{}", completion_line(&config.output_file_name, &summary));
    Ok(())
}

/// Confirmation printed after a successful run
fn completion_line(output_name: &str, summary: &BundleSummary) -> String {
    let mut details = vec![plural(summary.files_written, "file", "files")];
    if summary.unreadable > 0 {
        details.push(format!("{} unreadable", summary.unreadable));
    }
    if summary.skipped_dirs > 0 {
        details.push(plural(
            summary.skipped_dirs,
            "skipped directory",
            "skipped directories",
        ));
    }

    format!(
        "✅ Done! All code collected in {} ({})",
        Style::new().bold().apply_to(output_name),
        details.join(", ")
    )
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}
