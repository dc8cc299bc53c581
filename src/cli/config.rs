//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default source directory holding test/ and page/
    pub source_dir: Option<PathBuf>,

    /// Build-registration command run inside the destination tree
    pub mach: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/fixgen/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fixgen")
            .join("config.toml")
    }

    /// Resolve the source directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--source-dir` argument
    /// 2. Config file `source_dir` setting
    /// 3. Current working directory
    pub fn source_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.source_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the build-registration command.
    ///
    /// Defaults to `./mach`, resolved relative to the destination tree.
    pub fn mach(&self) -> String {
        self.mach.clone().unwrap_or_else(|| "./mach".to_string())
    }
}
