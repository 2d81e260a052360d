//! Config module.
//! Runtime settings assembled from CLI flags, plus directory validation.
//! There is no config file: every value comes from the command line or a default.

pub mod types;
mod validate;

pub use types::{Config, LogLevel};
pub use validate::validate_directory;

/// Note extension scanned when `--extension` is not given.
pub const NOTE_EXTENSION_DEFAULT: &str = "md";
