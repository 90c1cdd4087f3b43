//! Error types for dfalex
//!
//! Tokenization itself is total and never fails; these errors come from the
//! collaborators around it (reading sources, rendering output, batch setup).

use std::path::PathBuf;
use thiserror::Error;

/// dfalex errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Source errors
    /// Source file does not exist
    ///
    /// **Triggered by:** Passing a path that cannot be found
    /// **Example:** `dfalex missing.cpp`
    #[error("Source not found: {}", .path.display())]
    SourceNotFound {
        /// Requested path
        path: PathBuf,
    },

    /// Source exists but could not be read
    #[error("Cannot read source {}: {message}", .path.display())]
    SourceUnreadable {
        /// Requested path
        path: PathBuf,
        /// Underlying I/O error description
        message: String,
    },

    /// Source is not valid UTF-8
    #[error("Source is not valid UTF-8: {}", .path.display())]
    InvalidEncoding {
        /// Requested path
        path: PathBuf,
    },

    // Output errors
    /// Token output could not be rendered
    #[error("Render error: {0}")]
    RenderError(String),

    /// Batch worker pool could not be created
    #[error("Batch error: {0}")]
    BatchError(String),
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that cannot be recovered from
    Fatal,
    /// Error that may go away if retried (e.g. with another input)
    Recoverable,
}

impl Error {
    /// Maps an I/O error on `path` to the matching source error
    pub fn from_io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => Error::SourceNotFound { path },
            std::io::ErrorKind::InvalidData => Error::InvalidEncoding { path },
            _ => Error::SourceUnreadable {
                path,
                message: err.to_string(),
            },
        }
    }

    /// Classify error severity
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            Error::SourceNotFound { .. } => ErrorSeverity::Recoverable,
            Error::SourceUnreadable { .. } => ErrorSeverity::Recoverable,
            Error::InvalidEncoding { .. } => ErrorSeverity::Recoverable,

            Error::RenderError(_) => ErrorSeverity::Fatal,
            Error::BatchError(_) => ErrorSeverity::Fatal,
        }
    }
}

/// Result type for dfalex operations
pub type Result<T> = std::result::Result<T, Error>;
