//! Recursive note scanning.
//! Walks a directory tree, reads every note with the configured extension, and
//! keeps the paths whose content satisfies a predicate.
//!
//! Unreadable files and directories are logged and skipped; a scan never
//! fails because of a single entry.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::classify::{contains_literal, is_naked_url};
use crate::errors::VaultSweepError;

/// Paths matched by one scan pass. Ordered so printing is stable within a run;
/// callers should still treat it as a set.
pub type MatchSet = BTreeSet<PathBuf>;

/// Walk `root` and collect every note whose content satisfies `predicate`.
///
/// `root` is expected to be validated already. `extension` is compared
/// case-sensitively against the file extension (no leading dot).
pub fn scan_tree<F>(root: &Path, extension: &str, predicate: F) -> MatchSet
where
    F: Fn(&str) -> bool,
{
    let mut matches = MatchSet::new();
    let mut visited = 0usize;
    let mut skipped = 0usize;

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped += 1;
                let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                warn!(kind = "walk_error", path = %path, error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        // Directory links are not descended into, but a linked note is read through.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file || !is_note(entry.path(), extension) {
            continue;
        }
        visited += 1;

        let path = entry.into_path();
        match fs::read_to_string(&path) {
            Ok(content) => {
                if predicate(&content) {
                    debug!(path = %path.display(), "note matched");
                    matches.insert(path);
                }
            }
            Err(source) => {
                skipped += 1;
                let err = VaultSweepError::ContentRead { path, source };
                warn!(code = err.code(), kind = err.kind(), "{err}");
            }
        }
    }

    debug!(
        root = %root.display(),
        visited,
        skipped,
        matched = matches.len(),
        "scan finished"
    );
    matches
}

/// Notes whose whole content is a single http(s) URL.
pub fn find_naked_urls(root: &Path, extension: &str) -> MatchSet {
    scan_tree(root, extension, is_naked_url)
}

/// Notes containing `needle` anywhere in their content.
pub fn find_containing(root: &Path, extension: &str, needle: &str) -> MatchSet {
    scan_tree(root, extension, |content| contains_literal(content, needle))
}

fn is_note(path: &Path, extension: &str) -> bool {
    path.extension() == Some(OsStr::new(extension))
}
