//! Typed error definitions for vault_sweep.
//! Splits failures into run-fatal validation errors and per-file errors that
//! are reported and skipped.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a directory failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryFault {
    NotFound,
    NotADirectory,
    NotReadable,
}

impl fmt::Display for DirectoryFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DirectoryFault::NotFound => "does not exist",
            DirectoryFault::NotADirectory => "is not a directory",
            DirectoryFault::NotReadable => "is not readable",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum VaultSweepError {
    #[error("Invalid directory '{path}': {reason}")]
    InvalidDirectory { path: PathBuf, reason: DirectoryFault },

    #[error("Move target exists but is not a directory: {0}")]
    InvalidTarget(PathBuf),

    #[error("Source file no longer exists: {0}")]
    SourceMissing(PathBuf),

    #[error("Destination already exists, refusing to overwrite: {dest} (from {source_path})")]
    DestinationConflict { source_path: PathBuf, dest: PathBuf },

    #[error("Could not read note {path}: {source}")]
    ContentRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Move failed for {source_path}: {message}")]
    Move { source_path: PathBuf, message: String },

    #[error("Source path has no file name: {0}")]
    InvalidSource(PathBuf),
}

impl VaultSweepError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            VaultSweepError::InvalidDirectory { .. } => 2,
            VaultSweepError::InvalidTarget(_) => 3,
            VaultSweepError::SourceMissing(_) => 4,
            VaultSweepError::DestinationConflict { .. } => 5,
            VaultSweepError::ContentRead { .. } => 6,
            VaultSweepError::Move { .. } => 7,
            VaultSweepError::InvalidSource(_) => 8,
        }
    }

    /// Short snake_case tag used as the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            VaultSweepError::InvalidDirectory { .. } => "invalid_directory",
            VaultSweepError::InvalidTarget(_) => "invalid_target",
            VaultSweepError::SourceMissing(_) => "source_missing",
            VaultSweepError::DestinationConflict { .. } => "destination_conflict",
            VaultSweepError::ContentRead { .. } => "content_read",
            VaultSweepError::Move { .. } => "move_failed",
            VaultSweepError::InvalidSource(_) => "invalid_source",
        }
    }

    /// Validation failures abort the whole run; everything else is per-file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            VaultSweepError::InvalidDirectory { .. } | VaultSweepError::InvalidTarget(_)
        )
    }
}
