//! Isolated source and destination trees with a fake build tool.

#![allow(dead_code)]

use super::FixgenCommand;
use fixgen::cli::handlers::{FIXTURE_SUBDIR, TEST_SUBDIR};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fake mach script: logs its arguments and creates the test subtree the
/// way `mach addtest` does in a real checkout.
const FAKE_MACH: &str = "#!/bin/sh\n\
printf '%s\\n' \"$*\" >> mach.log\n\
mkdir -p browser/extensions/formautofill/test/browser/heuristics/third_party\n\
exit 0\n";

const FAILING_MACH: &str = "#!/bin/sh\nexit 1\n";

/// Isolated test environment with a source directory, a destination tree,
/// and a fake `mach` executable at the destination root.
///
/// The temp directory is cleaned up on drop.
pub struct TestEnv {
    _temp_dir: TempDir,
    source_dir: PathBuf,
    dest_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with a succeeding fake mach.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let source_dir = temp_dir.path().join("source");
        let dest_dir = temp_dir.path().join("dest");
        fs::create_dir_all(source_dir.join("test")).expect("Failed to create source tree");
        fs::create_dir_all(&dest_dir).expect("Failed to create destination tree");

        let env = Self {
            _temp_dir: temp_dir,
            source_dir,
            dest_dir,
        };
        env.install_mach(FAKE_MACH);
        env
    }

    /// Returns the source directory (holds test/ and page/).
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Returns the destination tree root.
    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Writes a description file into the source test/ directory.
    pub fn add_description(&self, name: &str, content: &str) -> PathBuf {
        let path = self.source_dir.join("test").join(name);
        fs::write(&path, content).expect("Failed to write description file");
        path
    }

    /// Writes a page asset at a path relative to the source page/ directory.
    pub fn add_page_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.source_dir.join("page").join(relative);
        fs::create_dir_all(path.parent().expect("page asset has a parent"))
            .expect("Failed to create page subdirectory");
        fs::write(&path, content).expect("Failed to write page asset");
        path
    }

    /// Replaces the fake mach with one that always fails.
    pub fn fail_mach(&self) {
        self.install_mach(FAILING_MACH);
    }

    /// Returns the arguments the fake mach was invoked with, one line per
    /// invocation, or an empty string if it never ran.
    pub fn mach_log(&self) -> String {
        fs::read_to_string(self.dest_dir.join("mach.log")).unwrap_or_default()
    }

    /// Path of the generated test file next to the source directory.
    pub fn local_test_file(&self, hostname: &str) -> PathBuf {
        self.source_dir.join(format!("browser_{hostname}.js"))
    }

    /// Path of the installed test file inside the destination tree.
    pub fn installed_test_file(&self, hostname: &str) -> PathBuf {
        self.dest_dir
            .join(TEST_SUBDIR)
            .join(format!("browser_{hostname}.js"))
    }

    /// Path of the fixture directory for a hostname.
    pub fn fixture_dir(&self, hostname: &str) -> PathBuf {
        self.dest_dir.join(FIXTURE_SUBDIR).join(hostname)
    }

    /// Creates a FixgenCommand configured for this test environment.
    pub fn cmd(&self) -> FixgenCommand {
        FixgenCommand::new()
            .source_dir(&self.source_dir)
            .dest(&self.dest_dir)
    }

    fn install_mach(&self, script: &str) {
        let path = self.dest_dir.join("mach");
        fs::write(&path, script).expect("Failed to write fake mach");
        make_executable(&path);
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)
        .expect("Failed to stat fake mach")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod fake mach");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_source_and_dest_trees() {
        let env = TestEnv::new();
        assert!(env.source_dir().join("test").is_dir());
        assert!(env.dest_dir().is_dir());
        assert!(env.dest_dir().join("mach").is_file());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.dest_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_description_lands_in_test_dir() {
        let env = TestEnv::new();
        let path = env.add_description("example_org.json", "[]");
        assert!(path.exists());
        assert!(path.starts_with(env.source_dir().join("test")));
    }

    #[test]
    fn test_env_add_page_file_creates_parents() {
        let env = TestEnv::new();
        let path = env.add_page_file("assets/img/logo.png", "png");
        assert!(path.exists());
        assert!(path.starts_with(env.source_dir().join("page")));
    }

    #[test]
    fn test_env_provides_command_with_source_and_dest() {
        let env = TestEnv::new();
        let args = env.cmd().get_args().to_vec();
        assert_eq!(args[0], "--source-dir");
        assert_eq!(args[1], env.source_dir().to_string_lossy());
        assert_eq!(args[2], env.dest_dir().to_string_lossy());
    }
}
