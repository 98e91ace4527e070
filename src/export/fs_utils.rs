// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::io;
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - File does not exist → Ok
/// - File exists and `force` → Ok
/// - File exists without `force` → error (never overwrite silently)
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    Err(AppError::from(io::Error::other(format!(
        "File already exists: {} (use --force to overwrite)",
        path.display()
    ))))
}
