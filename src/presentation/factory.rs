//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};

use crate::application::{RunOptions, RunUseCase};
use crate::config::{Config, CONFIG_FILE};
use crate::error::RegenResult;
use crate::infrastructure::{
    ChildStdout, FsUnitDiscovery, JsonFingerprintStore, LocalFs, ProcessRunner,
};

/// Type alias for the concrete RunUseCase with all dependencies
pub type ConcreteRunUseCase =
    RunUseCase<FsUnitDiscovery, JsonFingerprintStore, ProcessRunner, LocalFs>;

/// Create a run use case for `project_root` with all dependencies wired up
///
/// `child_stdout` routes generator output; JSON mode sends it to stderr so
/// stdout carries only events. Fails only when the configured exclusion
/// patterns do not compile.
pub fn create_run_use_case(
    project_root: &Path,
    config: &Config,
    child_stdout: ChildStdout,
) -> RegenResult<ConcreteRunUseCase> {
    let tracked_root = resolve(project_root, &config.layout.tracked_root);
    let excludes = config.excludes(&tracked_root, &project_root.join(CONFIG_FILE))?;
    let layout = config.layout();

    let discovery = FsUnitDiscovery::new(project_root, layout.clone(), excludes);
    let runner = if config.runner.interpreter.is_empty() {
        ProcessRunner::direct()
    } else {
        ProcessRunner::with_interpreter(&config.runner.interpreter, &config.runner.args)
    }
    .with_stdout(child_stdout);

    Ok(RunUseCase::new(
        discovery,
        JsonFingerprintStore::new(),
        runner,
        LocalFs::new(),
        layout,
    ))
}

/// Run options with config paths resolved against `project_root`
pub fn run_options(project_root: &Path, config: &Config) -> RunOptions {
    RunOptions::new(
        resolve(project_root, &config.layout.tracked_root),
        resolve(project_root, &config.state.file),
    )
}

fn resolve(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
