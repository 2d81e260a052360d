//! Directory validation.
//! Checks existence, then directory-ness, then readability, and reports the first failure.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::errors::{DirectoryFault, VaultSweepError};

/// Ensure `path` exists, is a directory, and can be listed. No side effects.
pub fn validate_directory(path: &Path) -> Result<(), VaultSweepError> {
    let invalid = |reason| VaultSweepError::InvalidDirectory {
        path: path.to_path_buf(),
        reason,
    };

    let meta = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => invalid(DirectoryFault::NotFound),
        _ => invalid(DirectoryFault::NotReadable),
    })?;
    if !meta.is_dir() {
        return Err(invalid(DirectoryFault::NotADirectory));
    }
    fs::read_dir(path).map_err(|_| invalid(DirectoryFault::NotReadable))?;

    debug!(path = %path.display(), "directory validated");
    Ok(())
}
