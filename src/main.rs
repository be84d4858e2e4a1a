//! srcbundle - flatten a project's sources into one file
//!
//! Walks the project tree, skips dependency and build directories, and writes
//! every recognised source file into `PROJECT_FULL_CODE.txt`, each one
//! preceded by a `===== FILE: <path> =====` header.

use clap::Parser;

mod bundler;
mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod ui;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    if let Err(e) = commands::bundle::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
