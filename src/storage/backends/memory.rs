//! In-memory storage backend for testing

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::{RecorderError, RecorderResult};
use crate::storage::StorageBackend;

/// Holds log contents in a map, fully substituting for the filesystem
///
/// Existence checks, appends, reads and removal all go through the same map,
/// so deletion-recovery behavior is exercisable with no real I/O.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryBackend {
    /// Create an empty memory backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the raw contents of a log, if it exists
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files().get(path).cloned()
    }

    fn files(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, String>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StorageBackend for MemoryBackend {
    fn exists(&self, path: &Path) -> bool {
        self.files().contains_key(path)
    }

    fn append(&self, path: &Path, frame: &str) -> RecorderResult<()> {
        self.files()
            .entry(path.to_path_buf())
            .or_default()
            .push_str(frame);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> RecorderResult<String> {
        self.files().get(path).cloned().ok_or_else(|| {
            RecorderError::io(path, io::Error::from(io::ErrorKind::NotFound))
        })
    }

    fn remove(&self, path: &Path) -> RecorderResult<()> {
        self.files().remove(path).map(|_| ()).ok_or_else(|| {
            RecorderError::io(path, io::Error::from(io::ErrorKind::NotFound))
        })
    }
}
