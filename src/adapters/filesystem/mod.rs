//! Filesystem adapter for the `DocumentStore` port.
//!
//! Relative paths resolve against the store root (the working directory for
//! the CLI). Writes go through a temporary file in the destination directory
//! and are renamed into place, so an interrupted run never leaves a truncated
//! config behind.

mod document_store;

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed document store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FilesystemDocumentStore {
    root: PathBuf,
}

impl FilesystemDocumentStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// Absolute paths are kept as given.
    pub(crate) fn resolve_path(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}
