//! Error types for the event persistence engine

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for recording operations
pub type RecorderResult<T> = Result<T, RecorderError>;

/// Errors surfaced by event building and persistence
#[derive(Error, Debug)]
pub enum RecorderError {
    /// A required field was empty, or an empty event was passed to persist
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The backing storage could not be created, opened, or fully written
    #[error("I/O failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Framing or decoding an event record failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RecorderError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an I/O error for a storage path
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
