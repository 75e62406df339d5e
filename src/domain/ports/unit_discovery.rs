//! UnitDiscovery port - finds the units of a tracked tree

use std::path::Path;

use crate::domain::value_objects::Unit;
use crate::error::RegenResult;

/// Walks a tree and classifies files into generator and shared units
pub trait UnitDiscovery {
    /// Discover units below `tracked_root`.
    ///
    /// The order is stable for a given tree. A missing root yields no units.
    fn discover(&self, tracked_root: &Path) -> RegenResult<Vec<Unit>>;
}
