//! JSON Fingerprint Store
//!
//! Implements the FingerprintStore port as a flat JSON object mapping unit
//! keys to hex digests, e.g. `generators_hashes.json`:
//!
//! ```json
//! {
//!   "docs/posts/ECDSA/__generators__/ec.gen.py": "9f86d0…",
//!   "docs/posts/ECDSA/__generators__/misc.py": "60303a…"
//! }
//! ```

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use crate::domain::entities::FingerprintSet;
use crate::domain::ports::{FingerprintStore, StoreError, StoreResult};
use crate::domain::value_objects::ContentHash;
use crate::infrastructure::fs::LocalFs;

/// Default state file name, relative to the project root
pub const DEFAULT_STATE_FILE: &str = "generators_hashes.json";

/// JSON-based fingerprint store
pub struct JsonFingerprintStore {
    fs: LocalFs,
}

impl JsonFingerprintStore {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for JsonFingerprintStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FingerprintStore for JsonFingerprintStore {
    fn load(&self, path: &Path) -> StoreResult<FingerprintSet> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(FingerprintSet::new()),
            Err(e) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        let raw: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(|e| StoreError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        raw.into_iter()
            .map(|(key, value)| match ContentHash::parse(&value) {
                Some(hash) => Ok((key, hash)),
                None => Err(StoreError::Parse {
                    path: path.to_path_buf(),
                    message: format!("'{}' is not a valid digest for {}", value, key),
                }),
            })
            .collect()
    }

    fn save(&self, set: &FingerprintSet, path: &Path) -> StoreResult<()> {
        let raw: BTreeMap<&str, &str> = set.entries().map(|(k, v)| (k, v.as_str())).collect();

        let mut content = serde_json::to_string_pretty(&raw).map_err(|e| StoreError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        content.push('\n');

        self.fs
            .write_atomic(path, content.as_bytes())
            .map_err(|e| StoreError::Io {
                path: path.to_path_buf(),
                source: e,
            })
    }
}
