//! fixgen - scaffolds formautofill heuristic browser-test fixtures

pub mod cli;
pub mod domain;
pub mod infra;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, config::Config, handlers::handle_generate};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let source_dir = config.source_dir(cli.source_dir.as_ref());
    let verbose = cli.verbose > 0;

    handle_generate(&cli.dest, &source_dir, &config.mach(), cli.format, verbose)
}
