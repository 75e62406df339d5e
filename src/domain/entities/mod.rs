//! Domain Entities

pub mod fingerprints;

pub use fingerprints::FingerprintSet;
