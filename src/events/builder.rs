//! Per-kind event construction with field validation

use chrono::Utc;
use serde_json::{Map, Value};

use crate::error::{RecorderError, RecorderResult};

use super::{fields, Event, EventKind};

/// Builds structured events for one recording session
///
/// Configured once with the host IDE identifier; construction methods are
/// pure apart from reading the wall clock. Required identifier fields are
/// validated before the event is assembled, so a failed build never produces
/// a partially filled event.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    ide: String,
}

impl EventBuilder {
    /// Create a builder for the given IDE identifier
    pub fn new(ide: impl Into<String>) -> Self {
        Self { ide: ide.into() }
    }

    /// The configured IDE identifier
    pub fn ide(&self) -> &str {
        &self.ide
    }

    /// Build a text change event
    ///
    /// `text` is the inserted text and may be empty (a pure deletion inserts
    /// nothing). `offset` is where the change applied, `length` how much text
    /// was removed. `source_file` is the fully qualified file name and
    /// `change_origin` names who caused the change (see [`super::origins`]).
    pub fn text_change(
        &self,
        text: &str,
        offset: i64,
        length: i64,
        source_file: &str,
        change_origin: &str,
    ) -> RecorderResult<Event> {
        require_non_empty(fields::ENTITY_ADDRESS, source_file)?;
        require_non_empty(fields::CHANGE_ORIGIN, change_origin)?;

        let mut map = self.common(EventKind::TextChange);
        map.insert(fields::TEXT.to_string(), Value::from(text));
        map.insert(fields::OFFSET.to_string(), Value::from(offset));
        map.insert(fields::LENGTH.to_string(), Value::from(length));
        map.insert(fields::ENTITY_ADDRESS.to_string(), Value::from(source_file));
        map.insert(fields::CHANGE_ORIGIN.to_string(), Value::from(change_origin));
        Ok(Event::from_fields(map))
    }

    /// Build a file open event for a fully qualified file address
    pub fn file_open(&self, entity: &str) -> RecorderResult<Event> {
        self.file_event(EventKind::FileOpen, entity)
    }

    /// Build a file close event
    pub fn file_close(&self, entity: &str) -> RecorderResult<Event> {
        self.file_event(EventKind::FileClose, entity)
    }

    /// Build a file save event
    pub fn file_save(&self, entity: &str) -> RecorderResult<Event> {
        self.file_event(EventKind::FileSave, entity)
    }

    /// Build a test run event for a fully qualified test method
    pub fn test_run(&self, test_method: &str, test_result: &str) -> RecorderResult<Event> {
        require_non_empty(fields::ENTITY_ADDRESS, test_method)?;
        require_non_empty(fields::TEST_RESULT, test_result)?;

        let mut map = self.common(EventKind::TestRun);
        map.insert(fields::ENTITY_ADDRESS.to_string(), Value::from(test_method));
        map.insert(fields::TEST_RESULT.to_string(), Value::from(test_result));
        Ok(Event::from_fields(map))
    }

    /// Build a snapshot event for an archived workspace state
    pub fn snapshot(&self, snapshot_path: &str) -> RecorderResult<Event> {
        require_non_empty(fields::ENTITY_ADDRESS, snapshot_path)?;

        let mut map = self.common(EventKind::Snapshot);
        map.insert(fields::ENTITY_ADDRESS.to_string(), Value::from(snapshot_path));
        Ok(Event::from_fields(map))
    }

    /// Build a debug launch event
    pub fn debug_launch(
        &self,
        launch_time: &str,
        entry_point: &str,
        attributes: Map<String, Value>,
    ) -> RecorderResult<Event> {
        self.launch(EventKind::DebugLaunch, launch_time, entry_point, attributes)
    }

    /// Build a normal (run, not debug) launch event
    pub fn normal_launch(
        &self,
        launch_time: &str,
        entry_point: &str,
        attributes: Map<String, Value>,
    ) -> RecorderResult<Event> {
        self.launch(EventKind::NormalLaunch, launch_time, entry_point, attributes)
    }

    /// Build a launch end event for a previously recorded launch
    pub fn launch_end(&self, launch_time: &str) -> RecorderResult<Event> {
        require_non_empty(fields::LAUNCH_TIMESTAMP, launch_time)?;

        let mut map = self.common(EventKind::LaunchEnd);
        map.insert(fields::LAUNCH_TIMESTAMP.to_string(), Value::from(launch_time));
        Ok(Event::from_fields(map))
    }

    /// Build the session marker written as a log file's first frame
    ///
    /// Carries only the common fields. Not reachable through the recorder
    /// API; the store emits it on initialization.
    pub fn file_init(&self) -> Event {
        Event::from_fields(self.common(EventKind::FileInit))
    }

    fn file_event(&self, kind: EventKind, entity: &str) -> RecorderResult<Event> {
        require_non_empty(fields::ENTITY_ADDRESS, entity)?;

        let mut map = self.common(kind);
        map.insert(fields::ENTITY_ADDRESS.to_string(), Value::from(entity));
        Ok(Event::from_fields(map))
    }

    fn launch(
        &self,
        kind: EventKind,
        launch_time: &str,
        entry_point: &str,
        attributes: Map<String, Value>,
    ) -> RecorderResult<Event> {
        require_non_empty(fields::LAUNCH_TIMESTAMP, launch_time)?;
        require_non_empty(fields::ENTITY_ADDRESS, entry_point)?;

        let mut map = self.common(kind);
        map.insert(fields::ENTITY_ADDRESS.to_string(), Value::from(entry_point));
        map.insert(
            fields::LAUNCH_ATTRIBUTES.to_string(),
            Value::Object(attributes),
        );
        map.insert(fields::LAUNCH_TIMESTAMP.to_string(), Value::from(launch_time));
        Ok(Event::from_fields(map))
    }

    // Common fields come first so every frame reads IDE, eventType, timestamp
    // in that order. The timestamp is whole epoch seconds as a string for
    // cross-reader consistency.
    fn common(&self, kind: EventKind) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(fields::IDE.to_string(), Value::from(self.ide.as_str()));
        map.insert(fields::EVENT_TYPE.to_string(), Value::from(kind.as_str()));
        map.insert(
            fields::TIMESTAMP.to_string(),
            Value::from(Utc::now().timestamp().to_string()),
        );
        map
    }
}

fn require_non_empty(field: &str, value: &str) -> RecorderResult<()> {
    if value.is_empty() {
        return Err(RecorderError::invalid_argument(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(())
}
