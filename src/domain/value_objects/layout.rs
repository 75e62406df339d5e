//! Generator tree layout
//!
//! Naming conventions that drive discovery and output placement:
//! generator sources live below a `__generators__` directory, their output
//! goes to the `__generated__` directory at the same depth.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_GENERATORS_DIR: &str = "__generators__";
pub const DEFAULT_GENERATED_DIR: &str = "__generated__";
pub const DEFAULT_GENERATOR_SUFFIX: &str = ".gen.py";

/// Directory markers and filename suffix used to classify units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    generators_dir: String,
    generated_dir: String,
    generator_suffix: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            generators_dir: DEFAULT_GENERATORS_DIR.to_string(),
            generated_dir: DEFAULT_GENERATED_DIR.to_string(),
            generator_suffix: DEFAULT_GENERATOR_SUFFIX.to_string(),
        }
    }
}

impl Layout {
    pub fn new(
        generators_dir: impl Into<String>,
        generated_dir: impl Into<String>,
        generator_suffix: impl Into<String>,
    ) -> Self {
        Self {
            generators_dir: generators_dir.into(),
            generated_dir: generated_dir.into(),
            generator_suffix: generator_suffix.into(),
        }
    }

    pub fn generators_dir(&self) -> &str {
        &self.generators_dir
    }

    pub fn generated_dir(&self) -> &str {
        &self.generated_dir
    }

    pub fn generator_suffix(&self) -> &str {
        &self.generator_suffix
    }

    /// Whether a file name marks a generator unit
    pub fn is_generator_name(&self, file_name: &OsStr) -> bool {
        file_name
            .to_str()
            .is_some_and(|name| name.ends_with(&self.generator_suffix))
    }

    /// Whether any directory component of `relative` is the generators marker.
    ///
    /// The final component (the file name) is not considered.
    pub fn is_under_generators(&self, relative: &Path) -> bool {
        relative
            .parent()
            .is_some_and(|dir| dir.components().any(|c| self.is_marker(&c)))
    }

    /// Derive the output directory for a generator unit.
    ///
    /// Replaces the last directory component equal to the generators marker
    /// with the generated marker and drops the file name. Returns `None` when
    /// the path has no generators component.
    pub fn output_location(&self, unit_path: &Path) -> Option<PathBuf> {
        let parent = unit_path.parent()?;
        let components: Vec<Component<'_>> = parent.components().collect();
        let marker_idx = components.iter().rposition(|c| self.is_marker(c))?;

        let mut out = PathBuf::new();
        for component in &components[..marker_idx] {
            out.push(component.as_os_str());
        }
        out.push(&self.generated_dir);
        for component in &components[marker_idx + 1..] {
            out.push(component.as_os_str());
        }
        Some(out)
    }

    fn is_marker(&self, component: &Component<'_>) -> bool {
        matches!(component, Component::Normal(name) if *name == OsStr::new(&self.generators_dir))
    }
}
