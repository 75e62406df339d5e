//! Test environment for isolated regen testing.
//!
//! Provides `TestEnv` - a temp project directory plus helpers to run the
//! regen CLI against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::*;

const REGEN_ENV_VARS: &[&str] = &[
    "REGEN_TRACKED_ROOT",
    "REGEN_STATE_FILE",
    "REGEN_INTERPRETER",
    "REGEN_VERBOSITY",
];

/// Result of running a regen CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every non-empty stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON ({e}): {l}"))
            })
            .collect()
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    regen_bin: PathBuf,
}

impl TestEnv {
    /// Empty project without a config file
    pub fn bare() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create temp dir"),
            regen_bin: PathBuf::from(env!("CARGO_BIN_EXE_regen")),
        }
    }

    /// Project configured for shell generators
    pub fn new() -> Self {
        let env = Self::bare();
        env.write_project_file("regen.toml", SH_CONFIG);
        env
    }

    /// Project with two counting generators and one shared helper
    pub fn with_two_generators() -> Self {
        let env = Self::new();
        env.write_project_file(GEN_ALPHA, COUNTING_GENERATOR);
        env.write_project_file(GEN_BETA, COUNTING_GENERATOR);
        env.write_project_file(SHARED, SHARED_HELPER);
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run regen in the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run regen in the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run regen from a specific directory
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.regen_bin);
        cmd.current_dir(cwd).args(args).env("NO_COLOR", "1");
        for key in REGEN_ENV_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute regen");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a project file, `None` when it does not exist
    pub fn read_project_file(&self, relative_path: &str) -> Option<String> {
        std::fs::read_to_string(self.project_path(relative_path)).ok()
    }

    /// Read the fingerprint state file
    pub fn read_state(&self) -> Option<String> {
        self.read_project_file(STATE_FILE)
    }

    /// How many times the counting generator ran in `output_dir`
    pub fn run_count(&self, output_dir: &str) -> usize {
        self.read_project_file(&format!("{output_dir}/runs.log"))
            .map(|log| log.lines().count())
            .unwrap_or(0)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
