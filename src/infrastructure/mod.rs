//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system (hashing, atomic writes)
//! - `repositories/` - Fingerprint store
//! - `events/` - Console and JSON event sinks
//! - `discovery` - Unit discovery over the tracked tree
//! - `process` - Generator subprocess runner

pub mod discovery;
pub mod events;
pub mod fs;
pub mod process;
pub mod repositories;

// Re-export for convenience
pub use discovery::FsUnitDiscovery;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use process::{ChildStdout, ProcessRunner, DEFAULT_INTERPRETER};
pub use repositories::{JsonFingerprintStore, DEFAULT_STATE_FILE};
