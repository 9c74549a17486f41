//! Public recording surface consumed by host-IDE hooks

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::RecorderConfig;
use crate::error::RecorderResult;
use crate::events::EventBuilder;
use crate::gateway::PersistenceGateway;
use crate::storage::{FileBackend, StorageBackend};
use crate::store::LogStore;

/// Records developer-activity events through a shared gateway
///
/// Thin glue: each `record_*` method builds the event and persists it
/// synchronously, propagating `InvalidArgument` and I/O failures to the
/// caller. Cheap to clone; clones share the same gateway.
#[derive(Clone)]
pub struct ActivityRecorder {
    builder: EventBuilder,
    gateway: Arc<PersistenceGateway>,
}

impl ActivityRecorder {
    /// Create a recorder over an existing gateway
    pub fn new(ide: impl Into<String>, gateway: Arc<PersistenceGateway>) -> Self {
        Self {
            builder: EventBuilder::new(ide),
            gateway,
        }
    }

    /// Wire up the default stack: file backend, log store, fresh gateway
    pub fn with_config(config: RecorderConfig) -> Self {
        let builder = EventBuilder::new(config.ide);
        let backend = Arc::new(FileBackend::new()) as Arc<dyn StorageBackend>;
        let store = LogStore::new(config.log_path, backend, builder.clone());
        Self {
            builder,
            gateway: Arc::new(PersistenceGateway::new(store)),
        }
    }

    /// The gateway shared by this recorder's clones
    pub fn gateway(&self) -> &Arc<PersistenceGateway> {
        &self.gateway
    }

    /// Record a text change in an open document
    ///
    /// `text` is the inserted text (may be empty for a deletion), `offset`
    /// the document position, `length` how much text was removed,
    /// `source_file` the fully qualified file name, `change_origin` who
    /// caused the change (see [`crate::events::origins`]).
    pub fn record_text_change(
        &self,
        text: &str,
        offset: i64,
        length: i64,
        source_file: &str,
        change_origin: &str,
    ) -> RecorderResult<()> {
        self.gateway.persist(&self.builder.text_change(
            text,
            offset,
            length,
            source_file,
            change_origin,
        )?)
    }

    /// Record that a file was opened
    pub fn record_file_open(&self, entity: &str) -> RecorderResult<()> {
        self.gateway.persist(&self.builder.file_open(entity)?)
    }

    /// Record that a file was closed
    pub fn record_file_close(&self, entity: &str) -> RecorderResult<()> {
        self.gateway.persist(&self.builder.file_close(entity)?)
    }

    /// Record that a file was saved
    pub fn record_file_save(&self, entity: &str) -> RecorderResult<()> {
        self.gateway.persist(&self.builder.file_save(entity)?)
    }

    /// Record a test run and its result
    pub fn record_test_run(&self, test_method: &str, test_result: &str) -> RecorderResult<()> {
        self.gateway
            .persist(&self.builder.test_run(test_method, test_result)?)
    }

    /// Record a workspace snapshot
    pub fn record_snapshot(&self, snapshot_path: &str) -> RecorderResult<()> {
        self.gateway.persist(&self.builder.snapshot(snapshot_path)?)
    }

    /// Record a program launch under the debugger
    pub fn record_debug_launch(
        &self,
        launch_time: &str,
        entry_point: &str,
        attributes: Map<String, Value>,
    ) -> RecorderResult<()> {
        self.gateway
            .persist(&self.builder.debug_launch(launch_time, entry_point, attributes)?)
    }

    /// Record a normal program launch
    pub fn record_normal_launch(
        &self,
        launch_time: &str,
        entry_point: &str,
        attributes: Map<String, Value>,
    ) -> RecorderResult<()> {
        self.gateway
            .persist(&self.builder.normal_launch(launch_time, entry_point, attributes)?)
    }

    /// Record the end of a previously recorded launch
    pub fn record_launch_end(&self, launch_time: &str) -> RecorderResult<()> {
        self.gateway.persist(&self.builder.launch_end(launch_time)?)
    }
}
