//! FingerprintStore port - abstraction for fingerprint persistence
//!
//! The coordinator loads the previous state and saves the new one without
//! knowing the on-disk format.

use std::path::{Path, PathBuf};

use crate::domain::entities::FingerprintSet;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// State file could not be read or written
    #[error("fingerprint store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// State file exists but is not a valid fingerprint map
    #[error(
        "fingerprint store {} is corrupt: {message} (delete it to force a full rerun)",
        path.display()
    )]
    Parse { path: PathBuf, message: String },

    /// Fingerprints could not be encoded for writing
    #[error("cannot encode fingerprint store {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },
}

/// Abstract repository for fingerprint persistence
pub trait FingerprintStore {
    /// Load the fingerprints recorded by the last successful run.
    ///
    /// A missing file is an empty set; a malformed file is an error.
    fn load(&self, path: &Path) -> StoreResult<FingerprintSet>;

    /// Replace the stored fingerprints with `set`.
    ///
    /// Readers never observe a partially written file.
    fn save(&self, set: &FingerprintSet, path: &Path) -> StoreResult<()>;
}
