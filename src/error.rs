//! Error types for SortCopy
//!
//! Only traversal failures and setup failures surface as errors. Failures
//! confined to a single file copy are absorbed by the copier and reported as
//! [`CopyOutcome::Failed`](crate::fs::CopyOutcome::Failed) instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for SortCopy operations
#[derive(Error, Debug)]
pub enum SortCopyError {
    /// I/O error while listing or preparing a directory
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source path is missing or not a directory
    #[error("Source is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A spawned traversal or copy task panicked or was aborted
    #[error("Task for '{path}' did not complete: {message}")]
    TaskFailed { path: PathBuf, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Summary could not be rendered
    #[error("Report error: {0}")]
    ReportError(String),
}

impl SortCopyError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Check if this error is a permission issue
    pub fn is_permission_error(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } | Self::NotADirectory(path) | Self::TaskFailed { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}

/// Result type alias for SortCopy operations
pub type Result<T> = std::result::Result<T, SortCopyError>;

impl From<serde_json::Error> for SortCopyError {
    fn from(err: serde_json::Error) -> Self {
        SortCopyError::ReportError(err.to_string())
    }
}

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| SortCopyError::io(path, e))
    }
}
