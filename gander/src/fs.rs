//! Filesystem helpers shared by the tool's commands.
//!
//! The interpreter deliberately goes through this layer for existence
//! probes so the walk stays decoupled from direct `std::fs` queries.

use std::path::Path;

/// Does `path` exist?
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Is `path` an existing directory?
pub fn is_dir(path: &Path) -> bool {
    path.is_dir()
}
