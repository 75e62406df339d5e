//! File system unit discovery
//!
//! Walks the tracked tree with the `ignore` walker. VCS ignore files are
//! not consulted: generator sources are tracked whether or not they are
//! committed. Entries are sorted by file name so the order is stable.

use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::UnitDiscovery;
use crate::domain::value_objects::{ExcludePatterns, Layout, Unit, UnitKind};
use crate::error::{RegenError, RegenResult};

/// Discovers units on the local file system
#[derive(Debug)]
pub struct FsUnitDiscovery {
    project_root: PathBuf,
    layout: Layout,
    excludes: ExcludePatterns,
}

impl FsUnitDiscovery {
    /// Create a discovery keyed relative to `project_root`
    pub fn new(project_root: impl Into<PathBuf>, layout: Layout, excludes: ExcludePatterns) -> Self {
        Self {
            project_root: project_root.into(),
            layout,
            excludes,
        }
    }

    fn classify(&self, path: &Path) -> UnitKind {
        match path.file_name() {
            Some(name) if self.layout.is_generator_name(name) => UnitKind::Generator,
            _ => UnitKind::Shared,
        }
    }
}

impl UnitDiscovery for FsUnitDiscovery {
    fn discover(&self, tracked_root: &Path) -> RegenResult<Vec<Unit>> {
        if !tracked_root.is_dir() {
            return Ok(Vec::new());
        }

        let walker = WalkBuilder::new(tracked_root)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut units = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| walk_error(tracked_root, e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let Ok(relative) = path.strip_prefix(tracked_root) else {
                continue;
            };
            if !self.layout.is_under_generators(relative) {
                continue;
            }
            if self.excludes.is_excluded(relative, false) {
                continue;
            }

            units.push(Unit::new(path, &self.project_root, self.classify(path)));
        }

        Ok(units)
    }
}

fn walk_error(root: &Path, err: ignore::Error) -> RegenError {
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    RegenError::io(root, source)
}
