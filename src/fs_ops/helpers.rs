//! I/O error descriptions.
//!
//! Turns an io::Error from a rename or mkdir into a one-line message naming the
//! operation, the path, and a platform-aware hint. Used for per-file move
//! failures and for fatal target-creation errors.

use anyhow::anyhow;
use std::io;
use std::path::Path;

fn hint_for_os_code(code: i32) -> Option<&'static str> {
    #[cfg(unix)]
    {
        match code {
            libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
            libc::EXDEV => Some("target is on another filesystem; atomic rename not possible"),
            libc::ENOENT => Some("path not found; it may have been moved or deleted"),
            libc::EEXIST | libc::ENOTEMPTY => Some("destination already exists"),
            libc::EROFS => Some("read-only filesystem"),
            libc::EBUSY => Some("resource busy"),
            libc::ENAMETOOLONG => Some("file name or path too long"),
            libc::ENOSPC => Some("no space left on device"),
            _ => None,
        }
    }
    #[cfg(windows)]
    {
        match code {
            5 => Some("access denied; check permissions"),
            17 => Some("target is on another drive; atomic rename not possible"),
            2 | 3 => Some("path not found; it may have been moved or deleted"),
            32 => Some("file is in use by another process"),
            80 | 183 => Some("destination already exists"),
            206 => Some("file name or path too long"),
            _ => None,
        }
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = code;
        None
    }
}

fn hint_for_kind(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; it may have been moved or deleted"),
        io::ErrorKind::AlreadyExists => Some("destination already exists"),
        _ => None,
    }
}

/// "<op> '<path>': <error> (<hint>) [os code: N]"
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    let hint = match e.raw_os_error() {
        Some(code) => hint_for_os_code(code),
        None => hint_for_kind(e.kind()),
    };
    if let Some(h) = hint {
        msg.push_str(&format!(" ({h})"));
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}

/// Adapter for anyhow::Result code: `.map_err(io_error_with_help("create dir", dir))?`.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(describe_io_error(op, path, &e))
}
