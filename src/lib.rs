//! Regen - incremental runner for documentation asset generators
//!
//! Generator scripts live in `__generators__` directories inside a tracked
//! tree. Each run fingerprints every source file, reruns only the generators
//! whose inputs changed (all of them when a shared helper changed), and
//! records the new fingerprints once every selected generator succeeded.
//!
//! ```ignore
//! let report = regen::run(std::path::Path::new("."))?;
//! println!("ran {} generator(s)", report.executed.len());
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

use std::path::Path;

// Re-exports for convenience
pub use application::{RunOptions, RunReport, RunUseCase};
pub use config::Config;
pub use domain::services::{ExecutionPlan, SelectionReason};
pub use error::{RegenError, RegenResult};

/// Run one pass over `project_root` using its `regen.toml` (or defaults).
pub fn run(project_root: &Path) -> RegenResult<RunReport> {
    let (config, _warnings) = Config::load_for_project(project_root)?;
    let use_case = presentation::create_run_use_case(
        project_root,
        &config,
        infrastructure::ChildStdout::Inherit,
    )?;
    use_case.execute(&presentation::run_options(project_root, &config))
}
