//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::layout::{
    DEFAULT_GENERATED_DIR, DEFAULT_GENERATORS_DIR, DEFAULT_GENERATOR_SUFFIX,
};
use crate::domain::value_objects::{ExcludePatterns, Layout, DEFAULT_EXCLUDES};
use crate::error::{RegenError, RegenResult};
use crate::infrastructure::{DEFAULT_INTERPRETER, DEFAULT_STATE_FILE};

use super::loader::{self, ConfigWarning};

/// Project config file name, looked up in the project root
pub const CONFIG_FILE: &str = "regen.toml";

/// Default tracked root, relative to the project root
pub const DEFAULT_TRACKED_ROOT: &str = "docs/posts";

/// Tree layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_tracked_root")]
    pub tracked_root: PathBuf,

    #[serde(default = "default_generators_dir")]
    pub generators_dir: String,

    #[serde(default = "default_generated_dir")]
    pub generated_dir: String,

    #[serde(default = "default_generator_suffix")]
    pub generator_suffix: String,

    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tracked_root: default_tracked_root(),
            generators_dir: default_generators_dir(),
            generated_dir: default_generated_dir(),
            generator_suffix: default_generator_suffix(),
            exclude: default_exclude(),
        }
    }
}

fn default_tracked_root() -> PathBuf {
    PathBuf::from(DEFAULT_TRACKED_ROOT)
}

fn default_generators_dir() -> String {
    DEFAULT_GENERATORS_DIR.to_string()
}

fn default_generated_dir() -> String {
    DEFAULT_GENERATED_DIR.to_string()
}

fn default_generator_suffix() -> String {
    DEFAULT_GENERATOR_SUFFIX.to_string()
}

fn default_exclude() -> Vec<String> {
    DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()
}

/// Fingerprint state configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    #[serde(default = "default_state_file")]
    pub file: PathBuf,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            file: default_state_file(),
        }
    }
}

fn default_state_file() -> PathBuf {
    PathBuf::from(DEFAULT_STATE_FILE)
}

/// How generator units are launched
///
/// An empty `interpreter` runs each unit directly as a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            args: Vec::new(),
        }
    }
}

fn default_interpreter() -> String {
    DEFAULT_INTERPRETER.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub state: StateConfig,

    #[serde(default)]
    pub runner: RunnerConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RegenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `regen.toml` from the project root (or defaults), then apply
    /// `REGEN_*` environment overrides.
    pub fn load_for_project(project_root: &Path) -> RegenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_project(project_root)
    }

    /// Apply environment variable overrides (REGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Check values that would make discovery or output placement ambiguous.
    ///
    /// `file` names the source used in error messages.
    pub fn validate(&self, file: &Path) -> RegenResult<()> {
        let invalid = |message: String| RegenError::Config {
            file: file.to_path_buf(),
            message,
        };

        for (name, value) in [
            ("layout.generators_dir", &self.layout.generators_dir),
            ("layout.generated_dir", &self.layout.generated_dir),
        ] {
            if !is_single_segment(value) {
                return Err(invalid(format!(
                    "{} must be a single directory name, got '{}'",
                    name, value
                )));
            }
        }
        if self.layout.generators_dir == self.layout.generated_dir {
            return Err(invalid(
                "layout.generators_dir and layout.generated_dir must differ".to_string(),
            ));
        }
        if self.layout.generator_suffix.is_empty() {
            return Err(invalid("layout.generator_suffix must not be empty".to_string()));
        }
        Ok(())
    }

    /// Layout value object for discovery and output placement
    pub fn layout(&self) -> Layout {
        Layout::new(
            self.layout.generators_dir.clone(),
            self.layout.generated_dir.clone(),
            self.layout.generator_suffix.clone(),
        )
    }

    /// Compile exclusion patterns rooted at `tracked_root`
    pub fn excludes(&self, tracked_root: &Path, file: &Path) -> RegenResult<ExcludePatterns> {
        ExcludePatterns::new(tracked_root, &self.layout.exclude).map_err(|e| RegenError::Config {
            file: file.to_path_buf(),
            message: e.to_string(),
        })
    }
}

fn is_single_segment(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}
