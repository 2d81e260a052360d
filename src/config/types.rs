//! Core configuration types.
//! - Config holds one run's settings.
//! - LogLevel represents diagnostic verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::NOTE_EXTENSION_DEFAULT;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings about skipped files (default)
    #[default]
    Normal,
    /// Progress of each phase
    Info,
    /// Per-file decisions
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Settings for a single sweep.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory to scan; `None` means there is nothing to do
    pub scan_dir: Option<PathBuf>,
    /// Literal substring a naked-URL note must also contain
    pub filter: Option<String>,
    /// Where matching notes are moved, if anywhere
    pub move_target: Option<PathBuf>,
    /// Extension (without the dot) a file needs to count as a note
    pub extension: String,
    /// Diagnostic verbosity
    pub log_level: LogLevel,
    /// Report planned moves without renaming anything
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_dir: None,
            filter: None,
            move_target: None,
            extension: NOTE_EXTENSION_DEFAULT.to_string(),
            log_level: LogLevel::Normal,
            dry_run: false,
        }
    }
}
