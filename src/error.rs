//! Error types and handling for the spot disabler library
//!
//! Only document-level failures surface here. Per-page and per-colorant
//! anomalies (missing resources, malformed color spaces) are skipped locally
//! by the engine and never become an `Error`.

use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for spot disabler operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for spot disabler operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Failed to load PDF {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    #[error("Failed to write PDF {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Helper for creating a `Load` error from any displayable cause
    pub fn load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Helper for creating a `Write` error from any displayable cause
    pub fn write(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Write {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error is one of the fatal document-level failures
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Load { .. } | Error::Write { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Report(err.to_string())
    }
}
