//! Configuration module for regen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (REGEN_*)
//! 3. Project config (regen.toml in the project root)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{
    ColorMode, Config, LayoutConfig, OutputConfig, RunnerConfig, StateConfig, Verbosity,
    CONFIG_FILE, DEFAULT_TRACKED_ROOT,
};
