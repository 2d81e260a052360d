//! Filesystem mutations. Relocation is the only operation that changes anything on disk.

mod atomic;
mod helpers;
mod relocate;

pub use helpers::{describe_io_error, io_error_with_help};
pub use relocate::{relocate_files, MoveReport};
