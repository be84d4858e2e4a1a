//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// srcbundle - flatten a project into one text file
///
/// Collects every source file with a known extension into PROJECT_FULL_CODE.txt.
#[derive(Parser, Debug)]
#[command(
    name = "srcbundle",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Concatenate a project's source files into PROJECT_FULL_CODE.txt",
    long_about = "Walks the project tree, skips node_modules, .git, build, dist, .next and \
                  __pycache__, and writes every .sol, .js, .ts, .jsx, .tsx, .json, .yml, .yaml, \
                  .html, .css, .scss and .md file into PROJECT_FULL_CODE.txt in the current \
                  directory, each preceded by a '===== FILE: <path> =====' header.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  srcbundle                  \x1b[90m# Bundle the current directory\x1b[0m\n   \
                  srcbundle -w ../my-dapp    \x1b[90m# Bundle another project into ./PROJECT_FULL_CODE.txt\x1b[0m\n   \
                  srcbundle -v               \x1b[90m# Log every bundled file\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory to walk (defaults to current directory)
    #[arg(long, short = 'w', env = "SRCBUNDLE_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Do not show progress
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
