//! External command invocation behind an injectable seam.

use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Errors from running an external command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    Failed { program: String, status: String },
}

/// Runs an external command in a working directory.
///
/// The generator only depends on this trait, so tests can substitute a
/// recording stub for the real build tool.
pub trait CommandRunner {
    /// Runs `program` with `args` from `cwd`, waiting for completion.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Spawn` if the process cannot be launched and
    /// `CommandError::Failed` on a non-zero exit status.
    fn run(&self, program: &Path, args: &[&str], cwd: &Path) -> Result<(), CommandError>;
}

/// `CommandRunner` backed by `std::process::Command`.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &Path, args: &[&str], cwd: &Path) -> Result<(), CommandError> {
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| CommandError::Spawn {
                program: program.display().to_string(),
                source: e,
            })?;

        if !status.success() {
            return Err(CommandError::Failed {
                program: program.display().to_string(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

/// Resolves a configured program name against the working directory.
///
/// Whether `Command::current_dir` applies before or after resolving a
/// relative program path is platform dependent, so relative paths such as
/// `./mach` are anchored to `cwd` here. Bare names stay untouched and go
/// through the normal `PATH` lookup.
pub fn resolve_program(cwd: &Path, program: &str) -> PathBuf {
    let path = Path::new(program);
    if path.is_relative() && path.components().count() > 1 {
        cwd.join(path)
    } else {
        path.to_path_buf()
    }
}
