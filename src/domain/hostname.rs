//! Hostname identifier derived from a description file's name.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors deriving a hostname from a description file path.
#[derive(Debug, Error)]
pub enum HostnameError {
    #[error("description file has no usable name: {path}")]
    EmptyStem { path: PathBuf },

    #[error("description file name is not valid UTF-8: {path}")]
    NotUtf8 { path: PathBuf },
}

/// The site identifier a fixture is named after.
///
/// Derived once from the description file's stem and immutable afterwards.
/// Every generated name (test file, HTML fixture, fixture directory) is
/// built from this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostname(String);

impl Hostname {
    /// Derives the hostname from a description file path.
    ///
    /// # Errors
    ///
    /// Returns `HostnameError::EmptyStem` if the path has no file stem and
    /// `HostnameError::NotUtf8` if the stem is not valid UTF-8.
    pub fn from_description_path(path: &Path) -> Result<Self, HostnameError> {
        let stem = path
            .file_stem()
            .ok_or_else(|| HostnameError::EmptyStem { path: path.into() })?;
        let stem = stem
            .to_str()
            .ok_or_else(|| HostnameError::NotUtf8 { path: path.into() })?;
        if stem.is_empty() {
            return Err(HostnameError::EmptyStem { path: path.into() });
        }
        Ok(Self(stem.to_string()))
    }

    /// Returns the hostname as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the generated browser test file.
    pub fn test_file_name(&self) -> String {
        format!("browser_{}.js", self.0)
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
