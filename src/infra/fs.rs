//! File system operations for fixture generation.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use walkdir::WalkDir;

/// Errors during file system operations.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("expected exactly one .json description file in {dir}, found {found}")]
    DescriptionCount { dir: PathBuf, found: usize },

    #[error("failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Resolves the single `.json` description file in a directory.
///
/// The scan is not recursive; only regular files directly inside `dir`
/// count. A missing directory counts as zero matches.
///
/// # Errors
///
/// Returns `FsError::DescriptionCount` unless exactly one match exists.
pub fn find_description_file(dir: &Path) -> Result<PathBuf, FsError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(FsError::DescriptionCount {
                dir: dir.into(),
                found: 0,
            });
        }
        Err(e) => return Err(FsError::from_io(dir, e)),
    };

    let mut matches: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();

    match matches.len() {
        1 => Ok(matches.remove(0)),
        found => Err(FsError::DescriptionCount {
            dir: dir.into(),
            found,
        }),
    }
}

/// Writes text to a file path atomically.
///
/// Uses a temporary file and atomic rename to prevent partial writes.
/// The parent directory must exist.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `FsError::AtomicWrite` if the atomic rename fails.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), FsError> {
    let parent = path
        .parent()
        .ok_or_else(|| FsError::ParentNotFound { path: path.into() })?;

    if !parent.exists() {
        return Err(FsError::ParentNotFound {
            path: parent.into(),
        });
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.write_all(contents.as_bytes())
        .map_err(|e| FsError::Io {
            path: path.into(),
            source: e,
        })?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

/// Copies a single file, overwriting the destination if present.
///
/// Permission bits carry over; the parent of `dest` must already exist.
///
/// # Errors
///
/// Returns `FsError::NotFound`, `FsError::PermissionDenied`, or `FsError::Io`
/// depending on the underlying failure.
pub fn copy_file(src: &Path, dest: &Path) -> Result<(), FsError> {
    std::fs::copy(src, dest)
        .map(|_| ())
        .map_err(|e| FsError::from_io(dest, e))
}

/// Recursively copies a directory tree into `dest`.
///
/// Directories are created as needed (including `dest` itself) and files
/// at conflicting paths are overwritten. Entries already present under
/// `dest` but absent from `src` are left alone.
///
/// # Errors
///
/// Returns the first traversal or copy error encountered.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<(), FsError> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| FsError::Copy {
            path: src.into(),
            source: e,
        })?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).map_err(|e| FsError::from_io(&target, e))?;
        } else {
            copy_file(entry.path(), &target)?;
        }
    }
    Ok(())
}
