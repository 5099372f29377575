//! Input validation utilities
//!
//! This module validates CLI arguments before any batch work starts.

use crate::error::{PhotoToolsError, Result};
use std::path::{Path, PathBuf};

/// Validate that `path` is an existing directory and resolve it
///
/// The canonical form always has a final component, so `.` and `..` work as
/// inputs and the output directory lands beside the real directory.
pub fn validate_directory(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(PhotoToolsError::directory_unavailable(path));
    }

    path.canonicalize()
        .map_err(|source| PhotoToolsError::DirectoryUnavailable {
            path: path.to_path_buf(),
            source: Some(source),
        })
}
