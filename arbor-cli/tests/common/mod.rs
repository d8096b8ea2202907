//! Common test utilities for CLI integration tests.
//!
//! Every test gets its own temporary directory holding the data directory,
//! and runs the binary from inside it so no stray project configuration or
//! `ARBOR_*` variable leaks in.

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables cleared from every spawned command.
const ARBOR_ENV_VARS: &[&str] = &[
    "ARBOR_DATA_DIR",
    "ARBOR_WORKSPACE",
    "ARBOR_BUSY_TIMEOUT",
    "ARBOR_DISABLE_AUTOINIT",
    "ARBOR_MAXIMUM_LOCK_WAIT_SECONDS",
    "ARBOR_SYSTEM_PREFIXES",
    "ARBOR_OUTPUT_FORMAT",
    "ARBOR_LOG_MODE",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the arbor data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; arbor creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("arbor-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// The arbor binary, run from the temp directory with a clean environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("arbor").expect("Failed to find arbor binary");
        cmd.current_dir(&self.temp_path);
        for var in ARBOR_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Like [`TestEnv::command_bare`], with `--data-dir` set.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the repository file.
    pub fn repository_path(&self) -> PathBuf {
        self.data_dir.join("arbor.db")
    }

    /// Write a file into the data directory, creating it if needed.
    pub fn write_data_file(&self, name: &str, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join(name), contents).expect("Failed to write file");
    }

    /// Create each node in order, in the given workspace.
    pub fn touch_in(&self, workspace: &str, paths: &[&str]) {
        for path in paths {
            self.command()
                .args(["--workspace", workspace, "touch", path])
                .assert()
                .success();
        }
    }

    /// Create each node in order, in the default workspace.
    pub fn touch(&self, paths: &[&str]) {
        self.touch_in("default", paths);
    }

    /// Set one property on an existing node.
    pub fn set_prop(&self, path: &str, name: &str, value: &str) {
        self.command()
            .args(["touch", path, "--set-prop", &format!("{name}={value}")])
            .assert()
            .success();
    }

    /// Dump a workspace as JSON with properties.
    pub fn dump_json_in(&self, workspace: &str, path: &str) -> Value {
        let output = self
            .command()
            .args(["--workspace", workspace, "dump", path, "--props", "--format", "json"])
            .output()
            .expect("Failed to run dump command");
        assert!(
            output.status.success(),
            "Dump failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("Dump output is not JSON")
    }

    /// All node paths in a workspace, root included, in document order.
    pub fn node_paths_in(&self, workspace: &str) -> Vec<String> {
        self.dump_json_in(workspace, "/")
            .as_array()
            .expect("Dump output is not an array")
            .iter()
            .map(|entry| entry["path"].as_str().unwrap().to_string())
            .collect()
    }

    /// All node paths in the default workspace.
    pub fn node_paths(&self) -> Vec<String> {
        self.node_paths_in("default")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// A small site: system nodes plus content, for remove and purge tests.
#[allow(dead_code)]
pub const SITE: &[&str] = &[
    "/jcr:system",
    "/rep:security",
    "/cms",
    "/cms/content",
    "/cms/content/blog",
    "/cms/content/news",
    "/assets",
];
