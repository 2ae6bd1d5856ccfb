use std::io;

use thiserror::Error;

/// Library-wide error type for binder-config operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside template loading and output writing.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required option missing or option value malformed.
    #[error("{0}")]
    Usage(String),

    /// Destination already exists and overwrite was not requested.
    #[error("Output file already exists: {path} (use --force to overwrite)")]
    OutputExists { path: String },

    /// Template file missing or not parseable as YAML.
    #[error("Failed to load template {path}: {details}")]
    TemplateLoad { path: String, details: String },

    /// Template parses but lacks the expected string field.
    #[error("Template {path} is missing string field '{field}'")]
    TemplateShape { path: String, field: String },

    /// Destination could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub fn usage<S: Into<String>>(message: S) -> Self {
        AppError::Usage(message.into())
    }

    pub(crate) fn write_error(path: impl Into<String>, source: io::Error) -> Self {
        AppError::Write { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on failure class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Usage(_) | AppError::TemplateShape { .. } => io::ErrorKind::InvalidInput,
            AppError::OutputExists { .. } => io::ErrorKind::AlreadyExists,
            AppError::TemplateLoad { .. } => io::ErrorKind::InvalidData,
            AppError::Write { source, .. } => source.kind(),
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => 2,
            _ => 1,
        }
    }
}
