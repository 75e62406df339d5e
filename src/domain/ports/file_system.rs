//! FileSystem port - the file operations the run pipeline needs
//!
//! Lets the coordinator hash units and prepare output directories without
//! depending on a concrete implementation.

use std::io;
use std::path::Path;

use crate::domain::value_objects::ContentHash;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
pub trait FileSystem {
    /// Compute the content hash of a file, streaming its bytes
    fn hash(&self, path: &Path) -> io::Result<ContentHash>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}
