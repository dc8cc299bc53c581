//! Output format types for the run report.

use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;

/// Output format for the generator's run report.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable progress output (default)
    #[default]
    Human,
    /// JSON report for programmatic consumption
    Json,
}

/// Summary of a single generator run.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Hostname identifier derived from the description file
    pub hostname: String,
    /// Generated test file next to the source directory
    pub test_file: PathBuf,
    /// Installed copy inside the destination tree
    pub test_destination: PathBuf,
    /// Fixture directory for page assets, absent when page/ did not exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture_dir: Option<PathBuf>,
    /// Top-level page entries copied successfully
    pub assets_copied: usize,
    /// Top-level page entries that failed to copy
    pub assets_failed: usize,
}
