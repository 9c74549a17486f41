//! Real filesystem backend

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{RecorderError, RecorderResult};
use crate::storage::StorageBackend;

/// Appends frames to an ordinary file with `std::fs`
///
/// Each append opens the file in append mode and writes the whole frame in
/// one buffered write followed by a flush, so a frame is never partially
/// visible to a later scan from this writer.
#[derive(Debug, Default)]
pub struct FileBackend;

impl FileBackend {
    /// Create a new file backend
    pub fn new() -> Self {
        Self
    }
}

impl StorageBackend for FileBackend {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn append(&self, path: &Path, frame: &str) -> RecorderResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| RecorderError::io(path, e))?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| RecorderError::io(path, e))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(frame.as_bytes())
            .map_err(|e| RecorderError::io(path, e))?;
        writer.flush().map_err(|e| RecorderError::io(path, e))?;

        debug!(path = %path.display(), bytes = frame.len(), "appended frame");
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> RecorderResult<String> {
        fs::read_to_string(path).map_err(|e| RecorderError::io(path, e))
    }

    fn remove(&self, path: &Path) -> RecorderResult<()> {
        fs::remove_file(path).map_err(|e| RecorderError::io(path, e))
    }
}
