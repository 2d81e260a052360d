//! Atomic rename helper.
//! - Plain rename only; no copy fallback, so a move is all-or-nothing.
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs;
use std::io;
use std::path::Path;

/// Rename `src` to `dst`. The caller has already checked that `dst` is free;
/// another process creating it in between is not guarded against.
pub(super) fn try_atomic_move(src: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(src, dst)?;

    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // A failed fsync does not undo a completed rename.
        let _ = fs::File::open(parent).and_then(|d| d.sync_all());
    }

    Ok(())
}
