//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod fingerprints;

pub use fingerprints::{JsonFingerprintStore, DEFAULT_STATE_FILE};
