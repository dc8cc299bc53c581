//! CLI definition and command handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use output::OutputFormat;

/// fixgen - scaffold formautofill heuristic browser-test fixtures
#[derive(Parser, Debug)]
#[command(name = "fixgen", version, about, long_about = None)]
pub struct Cli {
    /// Destination project tree to install the test and fixtures into
    pub dest: PathBuf,

    /// Source directory holding test/ and page/ (overrides config file)
    #[arg(short = 's', long)]
    pub source_dir: Option<PathBuf>,

    /// Output format for the run report
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
