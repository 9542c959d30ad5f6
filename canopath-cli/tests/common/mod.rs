//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - An isolated environment with its own temporary tree and config dir
//! - Command builders that ignore the caller's CANOPATH_* variables
//! - Small filesystem fixtures

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENV_VARS: [&str; 8] = [
    "CANOPATH_BASE_DIR",
    "CANOPATH_TARGET_DIR",
    "CANOPATH_EXEC_MODE",
    "CANOPATH_MKDIR_MODE",
    "CANOPATH_MKDIR_STRICT",
    "CANOPATH_CONFIG_DIR",
    "CANOPATH_LOG_MODE",
    "RUST_LOG",
];

/// Test environment with an isolated configuration directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Directory passed as --config-dir
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("canopath-config");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// A bare command: the binary, run from the temp dir, with a clean environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("canopath").expect("Failed to find canopath binary");
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// A command with --config-dir pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// The temp path as a string.
    pub fn path_str(&self) -> String {
        self.temp_path
            .to_str()
            .expect("temp path is not UTF-8")
            .to_string()
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file with contents, creating parents as needed.
    pub fn create_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, yaml: &str) {
        fs::write(self.config_dir.join("config.yaml"), yaml).expect("Failed to write config");
    }

    /// Write a project configuration file into `dir` (relative to the temp path).
    pub fn write_project_config(&self, dir: &str, yaml: &str) -> PathBuf {
        let dir = self.create_dir(dir);
        fs::write(dir.join("canopath.yaml"), yaml).expect("Failed to write project config");
        dir
    }

    /// Run a command expected to succeed and return its trimmed stdout.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run canopath");
        assert!(
            output.status.success(),
            "canopath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the tests run with root privileges (permission checks are moot).
#[allow(dead_code)]
pub fn running_as_root() -> bool {
    (unsafe { libc::geteuid() }) == 0
}
