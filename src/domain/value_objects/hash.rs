//! Content Hash Value Object
//!
//! A validated, immutable digest of a file's bytes.
//! Used for change detection in the fingerprint store.

use std::fmt;

use sha2::{Digest, Sha256};

/// Length of a SHA-256 digest rendered as hex
pub const HEX_LEN: usize = 64;

/// Content hash value object
///
/// Wraps a SHA-256 digest as a 64-character lowercase hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(String);

impl ContentHash {
    /// Compute the hash of an in-memory buffer
    pub fn from_bytes(content: &[u8]) -> Self {
        Self::from_digest(Sha256::digest(content))
    }

    /// Finish a streaming hasher into a ContentHash
    pub fn from_hasher(hasher: Sha256) -> Self {
        Self::from_digest(hasher.finalize())
    }

    fn from_digest(digest: impl fmt::LowerHex) -> Self {
        Self(format!("{:x}", digest))
    }

    /// Parse a stored hex digest
    ///
    /// Returns `None` unless the input is exactly 64 lowercase hex characters.
    pub fn parse(hex: &str) -> Option<Self> {
        let valid = hex.len() == HEX_LEN
            && hex
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        valid.then(|| Self(hex.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
