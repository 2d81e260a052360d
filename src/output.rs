//! User-facing output.
//! Results go to stdout, problems to stderr. Prefixes are colored only when
//! the stream they go to is a TTY.

use owo_colors::OwoColorize;
use std::fmt::Display;
use std::path::Path;

use crate::fs_ops::MoveReport;
use crate::scan::MatchSet;

fn stdout_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn stderr_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_warn(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if stdout_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Print a plain line with no prefix. Used for output users may script against.
pub fn print_user(msg: impl Display) {
    println!("{}", msg);
}

/// Heading plus one indented path per line.
pub fn print_matches(matches: &MatchSet) {
    print_user("");
    print_user("Files containing only URLs:");
    for path in matches {
        print_user(format_args!("  {}", path.display()));
    }
}

/// Successes first, then failures with their reasons.
pub fn print_move_report(report: &MoveReport, dry_run: bool) {
    let verb = if dry_run { "Would move" } else { "Moved" };
    for (src, dest) in &report.moved {
        print_user(format_args!("{verb} {} to {}", src.display(), dest.display()));
    }
    for (src, err) in &report.failed {
        print_warn(&format!("Not moved {}: {}", src.display(), err));
    }
    if !report.moved.is_empty() && report.is_clean() && !dry_run {
        print_success(&format!("{} note(s) moved", report.moved.len()));
    }
}

pub fn print_no_matches(root: &Path) {
    print_user("No files with naked URLs found.");
    tracing::debug!(root = %root.display(), "empty working set");
}
