//! Storage abstraction for the event log
//!
//! The log store talks to its backing file only through [`StorageBackend`],
//! including existence checks, so deletion recovery is testable without a
//! real filesystem. [`FileBackend`] is the real implementation;
//! [`MemoryBackend`] substitutes for it in tests.

pub mod backends;

pub use backends::{FileBackend, MemoryBackend};

use std::path::Path;

use crate::error::RecorderResult;

/// Backing store for append-only session logs
pub trait StorageBackend: Send + Sync {
    /// Whether the log file currently exists
    ///
    /// Consulted on every initialization check; the store never trusts a
    /// cached answer.
    fn exists(&self, path: &Path) -> bool;

    /// Append one complete frame, creating the file if needed
    ///
    /// The frame must land either fully or not at all: implementations write
    /// it in a single buffered write followed by a flush.
    fn append(&self, path: &Path, frame: &str) -> RecorderResult<()>;

    /// Read the entire log contents
    fn read_to_string(&self, path: &Path) -> RecorderResult<String>;

    /// Delete the log file
    ///
    /// The engine never deletes its own log; this exists so tests can
    /// simulate external deletion through the same seam.
    fn remove(&self, path: &Path) -> RecorderResult<()>;
}
