//! Shared entry point through which all events are persisted

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{RecorderError, RecorderResult};
use crate::events::Event;
use crate::storage::StorageBackend;
use crate::store::LogStore;

/// Serializes every persist and init against a single [`LogStore`]
///
/// One gateway instance is wired at startup and shared (`Arc`) by all
/// recording call sites; there is no ambient global. The internal mutex
/// covers the whole check-file/create/append critical section, so the marker
/// is written exactly once under a first-init race and two concurrent
/// appends never interleave their bytes. Non-concurrent persists land in
/// call order.
pub struct PersistenceGateway {
    store: Mutex<LogStore>,
}

impl PersistenceGateway {
    /// Wrap a log store in a shareable gateway
    pub fn new(store: LogStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Durably append one event
    ///
    /// An event with no fields is rejected with `InvalidArgument` before the
    /// log is touched. Blocks on storage I/O; callers needing non-blocking
    /// behavior dispatch on their own thread.
    pub fn persist(&self, event: &Event) -> RecorderResult<()> {
        if event.is_empty() {
            return Err(RecorderError::invalid_argument(
                "cannot persist an empty event",
            ));
        }
        self.store().append(event)
    }

    /// Create the session log (with its marker) if it does not exist yet
    pub fn ensure_initialized(&self) -> RecorderResult<()> {
        self.store().ensure_initialized()
    }

    /// Re-derive the recorded events from the session log
    pub fn scan_events(&self) -> RecorderResult<Vec<Event>> {
        self.store().scan_events()
    }

    /// Re-derive the raw frame payloads from the session log
    pub fn scan_payloads(&self) -> RecorderResult<Vec<String>> {
        self.store().scan_payloads()
    }

    /// Swap the storage backend under the lock
    ///
    /// Test seam: substitutes the whole storage surface, existence checks
    /// included, and forgets the initialization hint.
    pub fn replace_backend(&self, backend: Arc<dyn StorageBackend>) {
        self.store().replace_backend(backend);
    }

    // A poisoned lock only means another caller panicked mid-append; the
    // store itself is still consistent (frames are single writes), so
    // recording continues.
    fn store(&self) -> MutexGuard<'_, LogStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
