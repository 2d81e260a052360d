//! Core library for `vault_sweep`.
//!
//! Finds notes whose whole content is a single bare URL, optionally narrows
//! them by a literal substring, and moves them into another folder.
//! The binary is a thin shell around these pieces.

pub mod classify;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod scan;

pub use classify::{contains_literal, is_naked_url};
pub use config::{validate_directory, Config, LogLevel};
pub use errors::{DirectoryFault, VaultSweepError};
pub use fs_ops::{relocate_files, MoveReport};
pub use scan::{find_containing, find_naked_urls, scan_tree, MatchSet};

/// Scan `root` for naked-URL notes and, when `filter` is given, keep only those
/// that also contain it. Each predicate runs in its own pass and the results
/// are intersected.
pub fn working_set(
    root: &std::path::Path,
    extension: &str,
    filter: Option<&str>,
) -> Result<MatchSet, VaultSweepError> {
    validate_directory(root)?;
    let naked = find_naked_urls(root, extension);
    let Some(needle) = filter else {
        return Ok(naked);
    };
    let containing = find_containing(root, extension, needle);
    Ok(naked.intersection(&containing).cloned().collect())
}
