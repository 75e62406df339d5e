//! Run Options

use std::path::{Path, PathBuf};

use crate::config::DEFAULT_TRACKED_ROOT;
use crate::infrastructure::DEFAULT_STATE_FILE;

/// Options for the run use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Directory walked for units
    pub tracked_root: PathBuf,
    /// Fingerprint state file
    pub state_file: PathBuf,
    /// Ignore recorded fingerprints and select every generator
    pub force: bool,
    /// Stop after planning (no directories, processes, or persistence)
    pub dry_run: bool,
}

impl RunOptions {
    pub fn new(tracked_root: impl Into<PathBuf>, state_file: impl Into<PathBuf>) -> Self {
        Self {
            tracked_root: tracked_root.into(),
            state_file: state_file.into(),
            force: false,
            dry_run: false,
        }
    }

    /// Default locations below `project_root`
    pub fn for_project(project_root: &Path) -> Self {
        Self::new(
            project_root.join(DEFAULT_TRACKED_ROOT),
            project_root.join(DEFAULT_STATE_FILE),
        )
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
