//! Storage seam for the template and the generated config.
//!
//! The generate command only talks to this trait; the filesystem adapter
//! backs the CLI and an in-memory fake backs the unit tests.

use std::io;
use std::path::Path;

use crate::domain::AppError;

/// How `write` treats an existing destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Fail with `AppError::OutputExists` if the destination exists.
    CreateNew,
    /// Replace the destination; a failed write leaves the old file intact.
    Replace,
}

/// Port for reading templates and writing generated documents.
pub trait DocumentStore {
    /// Check whether an entry already exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write UTF-8 content to `path` as a whole.
    fn write(&self, path: &Path, content: &str, mode: WriteMode) -> Result<(), AppError>;
}
