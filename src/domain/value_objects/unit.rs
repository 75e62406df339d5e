//! Unit value object
//!
//! A unit is one source file under the tracked tree. Its key is the
//! project-relative path with forward slashes, so the fingerprint store
//! reads the same on every platform.

use std::fmt;
use std::path::{Path, PathBuf};

/// Whether a unit is executed or only tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Executed to (re)produce derived output
    Generator,
    /// Not executed; a change invalidates every generator
    Shared,
}

impl UnitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Generator => "generator",
            UnitKind::Shared => "shared",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discovered source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    path: PathBuf,
    key: String,
    kind: UnitKind,
}

impl Unit {
    /// Create a unit from its on-disk path, keyed relative to `project_root`.
    ///
    /// Paths outside the project root keep their full path as key.
    pub fn new(path: impl Into<PathBuf>, project_root: &Path, kind: UnitKind) -> Self {
        let path = path.into();
        let key = unit_key(&path, project_root);
        Self { path, key, kind }
    }

    /// Path used to read and execute the unit
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stable identity, used as fingerprint store key
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn is_generator(&self) -> bool {
        self.kind == UnitKind::Generator
    }

    pub fn is_shared(&self) -> bool {
        self.kind == UnitKind::Shared
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Normalize a unit path into a store key (always forward slashes).
pub(crate) fn unit_key(path: &Path, project_root: &Path) -> String {
    let relative = path.strip_prefix(project_root).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}
