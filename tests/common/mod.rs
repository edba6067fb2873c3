//! Common test utilities for Waypoint CLI tests.
//!
//! `TestEnv` isolates each test inside a temp directory: the workbook
//! and config paths are routed through environment variables so tests
//! never touch a real home directory. stdin is closed by
//! `Command::output`, which keeps every run on the non-interactive
//! paths.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a Waypoint CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    #[allow(dead_code)]
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp directory for workbook and config
pub struct TestEnv {
    dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_waypoint")),
        }
    }

    pub fn workbook_path(&self) -> PathBuf {
        self.dir.path().join("workbook.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    #[allow(dead_code)]
    pub fn write_workbook(&self, content: &str) {
        std::fs::write(self.workbook_path(), content).expect("Failed to write workbook");
    }

    #[allow(dead_code)]
    pub fn read_workbook(&self) -> String {
        std::fs::read_to_string(self.workbook_path()).expect("Failed to read workbook")
    }

    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Run waypoint with this environment's workbook and config paths
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .args(args)
            .env("WAYPOINT_WORKBOOK_PATH", self.workbook_path())
            .env("WAYPOINT_CONFIG_PATH", self.config_path())
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to execute waypoint");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
