//! Error types for theme-fs

use std::path::PathBuf;

/// Result type for theme-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the filesystem boundary
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON at {path} (line {line}, column {column}): {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        line: usize,
        column: usize,
    },

    #[error("File discovery failed for pattern {pattern}: {message}")]
    Discovery { pattern: String, message: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
