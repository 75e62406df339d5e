//! Run Event Port
//!
//! Provides an observable interface for a regeneration run.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::services::SelectionReason;

/// Event emitted during a run
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// Run started
    Started {
        tracked_root: PathBuf,
        state_file: PathBuf,
        dry_run: bool,
    },

    /// Discovery completed
    Discovered { generators: usize, shared: usize },

    /// Execution plan computed
    Planned {
        selected: usize,
        total_generators: usize,
        rerun_all: bool,
        changed_shared: Vec<String>,
    },

    /// Generator left alone because nothing it depends on changed
    UnitSkipped { key: String },

    /// Generator is about to run
    UnitStarted {
        index: usize,
        total: usize,
        key: String,
        reason: SelectionReason,
        workdir: PathBuf,
    },

    /// Generator exited successfully
    UnitFinished {
        index: usize,
        key: String,
        duration_ms: u64,
    },

    /// Generator exited unsuccessfully; the run stops here
    UnitFailed {
        index: usize,
        key: String,
        exit_code: Option<i32>,
    },

    /// New fingerprints written
    Persisted { path: PathBuf, entries: usize },

    /// Run finished successfully
    ///
    /// For a dry run `executed` counts the generators that would have run.
    Completed {
        executed: usize,
        skipped: usize,
        dry_run: bool,
    },
}

/// Trait for receiving run events
///
/// Implementations:
/// - ConsoleEventSink: human progress on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait RunEventSink: Send + Sync {
    /// Handle a run event
    fn on_event(&self, event: RunEvent);

    /// Whether this sink wants per-unit skip events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RunEventSink for NoopEventSink {
    fn on_event(&self, _event: RunEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
