//! Durable append-only store for one session's event log

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::RecorderResult;
use crate::events::{Event, EventBuilder};
use crate::framing;
use crate::storage::StorageBackend;

/// Owns the log file for the current session
///
/// The file's first frame is always the `FileInit` marker. `initialized` is
/// a hint only: existence is re-checked through the backend on every
/// [`LogStore::ensure_initialized`] call, which is what makes recovery after
/// external deletion transparent to callers.
pub struct LogStore {
    path: PathBuf,
    backend: Arc<dyn StorageBackend>,
    builder: EventBuilder,
    initialized: bool,
}

impl LogStore {
    /// Create a store for a session log path
    ///
    /// Nothing touches storage until the first append or explicit
    /// initialization.
    pub fn new(
        path: impl Into<PathBuf>,
        backend: Arc<dyn StorageBackend>,
        builder: EventBuilder,
    ) -> Self {
        Self {
            path: path.into(),
            backend,
            builder,
            initialized: false,
        }
    }

    /// The session log path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the log file with its marker frame if it does not exist
    ///
    /// Idempotent: an existing file is accepted as already initialized and
    /// the marker is never rewritten or duplicated.
    pub fn ensure_initialized(&mut self) -> RecorderResult<()> {
        if self.backend.exists(&self.path) {
            self.initialized = true;
            return Ok(());
        }

        if self.initialized {
            warn!(
                path = %self.path.display(),
                "event log disappeared after initialization; recreating"
            );
        }

        let marker = framing::frame(&self.builder.file_init())?;
        self.backend.append(&self.path, &marker)?;
        self.initialized = true;
        info!(path = %self.path.display(), "initialized event log");
        Ok(())
    }

    /// Append one event as a single durable frame
    ///
    /// Re-checks initialization first, so an externally deleted file is
    /// recreated (marker first) before this event's frame lands. On failure
    /// the durable state is exactly as it was before the call.
    pub fn append(&mut self, event: &Event) -> RecorderResult<()> {
        self.ensure_initialized()?;
        let frame = framing::frame(event)?;
        self.backend.append(&self.path, &frame)?;
        debug!(
            event_type = event.event_type().unwrap_or("unknown"),
            "persisted event"
        );
        Ok(())
    }

    /// Re-derive the recorded frame payloads from the file, in append order
    pub fn scan_payloads(&self) -> RecorderResult<Vec<String>> {
        let raw = self.backend.read_to_string(&self.path)?;
        Ok(framing::scan(&raw).into_iter().map(String::from).collect())
    }

    /// Re-derive the recorded events, decoding each frame
    pub fn scan_events(&self) -> RecorderResult<Vec<Event>> {
        let raw = self.backend.read_to_string(&self.path)?;
        framing::scan(&raw).into_iter().map(framing::decode).collect()
    }

    /// Swap the storage backend and forget the initialization hint
    ///
    /// Test seam; the next append re-initializes against the new backend.
    pub fn replace_backend(&mut self, backend: Arc<dyn StorageBackend>) {
        self.backend = backend;
        self.initialized = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn store_with_memory() -> (LogStore, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        let store = LogStore::new(
            "/virtual/session.log",
            backend.clone() as Arc<dyn StorageBackend>,
            EventBuilder::new("testEditor"),
        );
        (store, backend)
    }

    #[test]
    fn first_init_writes_exactly_one_marker() {
        let (mut store, _backend) = store_with_memory();

        store.ensure_initialized().unwrap();
        store.ensure_initialized().unwrap();
        store.ensure_initialized().unwrap();

        let events = store.scan_events().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), Some("FileInit"));
    }

    #[test]
    fn append_initializes_lazily() {
        let (mut store, _backend) = store_with_memory();
        let event = EventBuilder::new("testEditor")
            .file_open("/ws/src/lib.rs")
            .unwrap();

        store.append(&event).unwrap();

        let events = store.scan_events().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type(), Some("FileInit"));
        assert_eq!(events[1].event_type(), Some("fileOpen"));
    }

    #[test]
    fn pre_existing_file_is_accepted_without_rewriting_marker() {
        let (mut store, backend) = store_with_memory();
        store.ensure_initialized().unwrap();

        // A second store over the same backing file, as after a restart.
        let mut second = LogStore::new(
            "/virtual/session.log",
            backend as Arc<dyn StorageBackend>,
            EventBuilder::new("testEditor"),
        );
        second.ensure_initialized().unwrap();

        assert_eq!(second.scan_events().unwrap().len(), 1);
    }

    #[test]
    fn external_deletion_recreates_marker_before_next_event() {
        let (mut store, backend) = store_with_memory();
        let builder = EventBuilder::new("testEditor");

        store.append(&builder.file_save("/ws/a.rs").unwrap()).unwrap();
        backend.remove(store.path()).unwrap();
        store.append(&builder.file_save("/ws/b.rs").unwrap()).unwrap();

        let events = store.scan_events().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type(), Some("FileInit"));
        assert_eq!(
            events[1].get_str(crate::events::fields::ENTITY_ADDRESS),
            Some("/ws/b.rs")
        );
    }

    #[test]
    fn scan_payloads_returns_raw_json() {
        let (mut store, _backend) = store_with_memory();
        store.ensure_initialized().unwrap();

        let payloads = store.scan_payloads().unwrap();
        assert_eq!(payloads.len(), 1);
        assert!(payloads[0].contains("\"FileInit\""));
    }
}
