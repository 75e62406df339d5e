//! FingerprintSet entity - tracks the content hash of every unit
//!
//! Pure data structure keyed by unit key. Loading and saving are handled by
//! a `FingerprintStore`.

use std::collections::BTreeMap;

use crate::domain::value_objects::ContentHash;

/// Mapping from unit key to the digest of its content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FingerprintSet {
    entries: BTreeMap<String, ContentHash>,
}

impl FingerprintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded hash for a unit key
    pub fn get(&self, key: &str) -> Option<&ContentHash> {
        self.entries.get(key)
    }

    /// Record the hash for a unit key, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, hash: ContentHash) {
        self.entries.insert(key.into(), hash);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Whether `key` is recorded with exactly `hash`
    ///
    /// An absent key never matches.
    pub fn matches(&self, key: &str, hash: &ContentHash) -> bool {
        self.entries.get(key) == Some(hash)
    }

    /// Iterate entries in key order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ContentHash)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ContentHash)> for FingerprintSet {
    fn from_iter<I: IntoIterator<Item = (String, ContentHash)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
