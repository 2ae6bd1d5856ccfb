//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::filesystem::FilesystemDocumentStore;
use crate::app::{AppContext, commands::generate};

pub use crate::app::commands::generate::GenerateOutcome;
pub use crate::domain::{AppError, GenerateOptions};

/// Create an `AppContext` rooted at a given path.
fn create_context(path: PathBuf) -> AppContext<FilesystemDocumentStore> {
    AppContext::new(FilesystemDocumentStore::new(path))
}

/// Generate a config, resolving relative paths against the current directory.
pub fn generate(options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    let ctx = AppContext::new(FilesystemDocumentStore::current()?);
    generate::execute(&ctx, options)
}

/// Generate a config, resolving relative paths against `root`.
pub fn generate_at(
    root: impl Into<PathBuf>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(root.into());
    generate::execute(&ctx, options)
}
