//! File relocation.
//! Moves a batch of notes into one target directory, flattening to base names.
//! Each file succeeds or fails on its own; only an unusable target aborts the batch.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::VaultSweepError;

use super::atomic::try_atomic_move;
use super::helpers::{describe_io_error, io_error_with_help};

/// Outcome of a relocation batch.
#[derive(Debug, Default)]
pub struct MoveReport {
    /// (source, destination) for every file that was moved
    pub moved: Vec<(PathBuf, PathBuf)>,
    /// (source, reason) for every file left in place
    pub failed: Vec<(PathBuf, VaultSweepError)>,
}

impl MoveReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Move every path in `sources` into `target`, keeping only its file name.
///
/// Fails before touching anything when `target` exists and is not a
/// directory, or cannot be created. With `dry_run` the checks still run but
/// nothing is created or renamed; planned destinations are reported as moved.
pub fn relocate_files<I, P>(sources: I, target: &Path, dry_run: bool) -> Result<MoveReport>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    prepare_target(target, dry_run)?;

    let mut report = MoveReport::default();
    for src in sources {
        let src = src.as_ref();
        // Nothing is renamed in dry-run, so earlier planned names must count as taken.
        let outcome = relocate_one(src, target, dry_run).and_then(|dest| {
            if dry_run && report.moved.iter().any(|(_, planned)| *planned == dest) {
                Err(VaultSweepError::DestinationConflict {
                    source_path: src.to_path_buf(),
                    dest,
                })
            } else {
                Ok(dest)
            }
        });
        match outcome {
            Ok(dest) => report.moved.push((src.to_path_buf(), dest)),
            Err(err) => {
                info!(code = err.code(), kind = err.kind(), path = %src.display(), "{err}");
                report.failed.push((src.to_path_buf(), err));
            }
        }
    }

    info!(
        target = %target.display(),
        moved = report.moved.len(),
        failed = report.failed.len(),
        dry_run,
        "relocation finished"
    );
    Ok(report)
}

fn prepare_target(target: &Path, dry_run: bool) -> Result<()> {
    match fs::metadata(target) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(VaultSweepError::InvalidTarget(target.to_path_buf()).into()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if dry_run {
                info!(action = "mkdir -p", path = %target.display(), "dry-run");
                return Ok(());
            }
            fs::create_dir_all(target)
                .map_err(io_error_with_help("create move target", target))?;
            debug!(path = %target.display(), "created move target");
            Ok(())
        }
        Err(e) => Err(io_error_with_help("inspect move target", target)(e)),
    }
}

fn relocate_one(src: &Path, target: &Path, dry_run: bool) -> Result<PathBuf, VaultSweepError> {
    if let Err(e) = fs::symlink_metadata(src) {
        return Err(if e.kind() == io::ErrorKind::NotFound {
            VaultSweepError::SourceMissing(src.to_path_buf())
        } else {
            VaultSweepError::Move {
                source_path: src.to_path_buf(),
                message: describe_io_error("stat source", src, &e),
            }
        });
    }
    let file_name = src
        .file_name()
        .ok_or_else(|| VaultSweepError::InvalidSource(src.to_path_buf()))?;
    let dest = target.join(file_name);

    // symlink_metadata so a dangling link at the destination still counts as taken.
    if fs::symlink_metadata(&dest).is_ok() {
        return Err(VaultSweepError::DestinationConflict {
            source_path: src.to_path_buf(),
            dest,
        });
    }

    if dry_run {
        info!(src = %src.display(), dest = %dest.display(), "dry-run: would move note");
        return Ok(dest);
    }

    try_atomic_move(src, &dest).map_err(|e| VaultSweepError::Move {
        source_path: src.to_path_buf(),
        message: describe_io_error("rename", src, &e),
    })?;
    debug!(src = %src.display(), dest = %dest.display(), "renamed note");
    Ok(dest)
}
