//! Error types for indexing and publishing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or publishing an index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path vanished mid-operation.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error with path context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Supplied source path does not exist or is not a directory.
    #[error("Source directory does not exist: {path}")]
    SourceNotFound { path: PathBuf },

    /// Scan root is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Manifest serialization failed.
    #[error("Failed to serialize manifest: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl IndexError {
    /// Create an I/O error with path context, classifying common kinds.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
