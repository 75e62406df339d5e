//! Run Result

use std::path::PathBuf;

use crate::domain::entities::FingerprintSet;
use crate::domain::services::ExecutionPlan;

/// Outcome of a successful run (or a dry run)
#[derive(Debug, Clone)]
pub struct RunReport {
    /// What the planner decided
    pub plan: ExecutionPlan,
    /// Keys of generators that ran, in execution order
    pub executed: Vec<String>,
    /// Fingerprints of every discovered unit
    pub fingerprints: FingerprintSet,
    /// Where fingerprints were (or would have been) persisted
    pub state_file: PathBuf,
    /// Whether execution and persistence were skipped
    pub dry_run: bool,
}

impl RunReport {
    /// Number of generators left alone
    pub fn skipped_count(&self) -> usize {
        self.plan.skipped().len()
    }

    /// True when nothing needed to run
    pub fn is_up_to_date(&self) -> bool {
        self.plan.is_empty()
    }
}
