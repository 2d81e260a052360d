//! CLI definition and parsing.
//! Defines Args and converts them into a Config.
//!
//! Notes:
//! - Nothing runs without --find-naked-urls; that is not an error.
//! - --debug is a shorthand for --log-level debug and wins over it.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::config::NOTE_EXTENSION_DEFAULT;

/// Find notes that hold nothing but a URL, and optionally move them aside.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "Find and relocate naked-URL notes")]
pub struct Args {
    /// Directory to search for notes that contain only a URL.
    #[arg(long = "find-naked-urls", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub find_naked_urls: Option<PathBuf>,

    /// Only keep notes whose content also contains this literal string (case-sensitive).
    #[arg(long, value_name = "STRING")]
    pub filter: Option<String>,

    /// Move matching notes into this directory (created if missing).
    #[arg(long = "move", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub move_to: Option<PathBuf>,

    /// Note file extension to scan, without the leading dot.
    #[arg(long, value_name = "EXT", default_value = NOTE_EXTENSION_DEFAULT)]
    pub extension: String,

    /// Show what would be moved, but do not modify files/directories.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging (shorthand for --log-level debug).
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Set log level: quiet, normal, info, debug.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Build the run's Config from the parsed flags.
    pub fn to_config(&self) -> Config {
        let extension = self.extension.trim().trim_start_matches('.');
        Config {
            scan_dir: self.find_naked_urls.clone(),
            filter: self.filter.clone(),
            move_target: self.move_to.clone(),
            extension: if extension.is_empty() {
                NOTE_EXTENSION_DEFAULT.to_string()
            } else {
                extension.to_string()
            },
            log_level: self.effective_log_level().unwrap_or_default(),
            dry_run: self.dry_run,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
