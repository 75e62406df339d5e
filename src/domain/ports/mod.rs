//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod fingerprint_store;
pub mod run_events;
pub mod unit_discovery;
pub mod unit_runner;

pub use file_system::FileSystem;
pub use fingerprint_store::{FingerprintStore, StoreError, StoreResult};
pub use run_events::{NoopEventSink, RunEvent, RunEventSink};
pub use unit_discovery::UnitDiscovery;
pub use unit_runner::{UnitOutcome, UnitRunner};
