//! JSON Event Sink
//!
//! Outputs run events as NDJSON for CI/automation consumption.

use crate::domain::ports::{RunEvent, RunEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl RunEventSink for JsonEventSink {
    fn on_event(&self, event: RunEvent) {
        let command = self.command;
        let json = match event {
            RunEvent::Started {
                tracked_root,
                state_file,
                dry_run,
            } => serde_json::json!({
                "event": "start",
                "command": command,
                "version": env!("CARGO_PKG_VERSION"),
                "root": tracked_root.display().to_string(),
                "state_file": state_file.display().to_string(),
                "dry_run": dry_run,
            }),

            RunEvent::Discovered { generators, shared } => serde_json::json!({
                "event": "discovered",
                "command": command,
                "generators": generators,
                "shared": shared,
            }),

            RunEvent::Planned {
                selected,
                total_generators,
                rerun_all,
                changed_shared,
            } => serde_json::json!({
                "event": "planned",
                "command": command,
                "selected": selected,
                "total_generators": total_generators,
                "rerun_all": rerun_all,
                "changed_shared": changed_shared,
            }),

            RunEvent::UnitSkipped { key } => serde_json::json!({
                "event": "item_skipped",
                "command": command,
                "unit": key,
            }),

            RunEvent::UnitStarted {
                index,
                total,
                key,
                reason,
                workdir,
            } => serde_json::json!({
                "event": "item_start",
                "command": command,
                "index": index,
                "total": total,
                "unit": key,
                "reason": reason.as_str(),
                "workdir": workdir.display().to_string(),
            }),

            RunEvent::UnitFinished {
                index,
                key,
                duration_ms,
            } => serde_json::json!({
                "event": "item_done",
                "command": command,
                "index": index,
                "unit": key,
                "duration_ms": duration_ms,
            }),

            RunEvent::UnitFailed {
                index,
                key,
                exit_code,
            } => serde_json::json!({
                "event": "item_error",
                "command": command,
                "index": index,
                "unit": key,
                "exit_code": exit_code,
            }),

            RunEvent::Persisted { path, entries } => serde_json::json!({
                "event": "persisted",
                "command": command,
                "path": path.display().to_string(),
                "entries": entries,
            }),

            RunEvent::Completed {
                executed,
                skipped,
                dry_run,
            } => serde_json::json!({
                "event": "complete",
                "command": command,
                "status": "success",
                "executed": executed,
                "skipped": skipped,
                "dry_run": dry_run,
            }),
        };

        self.write_event(json);
    }
}
