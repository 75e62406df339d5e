//! Value Objects
//!
//! Immutable types that describe what the engine tracks:
//! content hashes, units, and the generator tree layout.

pub mod exclude_patterns;
pub mod hash;
pub mod layout;
pub mod unit;

pub use exclude_patterns::{ExcludeError, ExcludePatterns, DEFAULT_EXCLUDES};
pub use hash::ContentHash;
pub use layout::Layout;
pub use unit::{Unit, UnitKind};
