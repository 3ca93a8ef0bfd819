//! Shared testing utilities for fawkes CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project and `$HOME` for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `fawkes` binary within the project.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("fawkes").expect("Failed to locate fawkes binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env_remove("FAWKES_LOG")
            .env_remove("EDITOR")
            .env_remove("VISUAL")
            .write_stdin("");
        cmd
    }

    /// Write a file relative to the project directory.
    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write project file");
    }

    /// Write a config file into the emulated home directory.
    pub fn write_home_config(&self, content: &str) {
        fs::write(self.home().join(".fawkes.json"), content).expect("Failed to write home config");
    }

    /// Read a file relative to the project directory.
    pub fn read_project_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read project file")
    }

    /// Whether a file exists relative to the project directory.
    pub fn project_file_exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }
}
