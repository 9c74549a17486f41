//! Event model for developer-activity records
//!
//! An [`Event`] is an ordered mapping of field name to JSON value. Every
//! event carries the common `IDE`, `eventType` and `timestamp` fields;
//! kind-specific fields follow in insertion order. Events are immutable once
//! built and the log retains only their serialized form.

mod builder;

pub use builder::EventBuilder;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON field names used across all event kinds
pub mod fields {
    pub const IDE: &str = "IDE";
    pub const EVENT_TYPE: &str = "eventType";
    pub const TIMESTAMP: &str = "timestamp";
    pub const TEXT: &str = "text";
    pub const OFFSET: &str = "offset";
    pub const LENGTH: &str = "len";
    pub const ENTITY_ADDRESS: &str = "entityAddress";
    pub const CHANGE_ORIGIN: &str = "changeOrigin";
    pub const TEST_RESULT: &str = "testResult";
    pub const LAUNCH_ATTRIBUTES: &str = "launchConfiguration";
    pub const LAUNCH_TIMESTAMP: &str = "launchTimestamp";
}

/// Well-known change origin tags for text changes
///
/// Any other non-empty tag is accepted as-is; these cover the usual sources.
pub mod origins {
    pub const USER: &str = "user";
    pub const REFRESH: &str = "refresh";
    pub const REFACTORING: &str = "refactoring";
    pub const UI_EVENT: &str = "ui-event";
}

/// The recognized event kinds, plus the synthetic session marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    TextChange,
    FileOpen,
    FileClose,
    FileSave,
    TestRun,
    Snapshot,
    DebugLaunch,
    NormalLaunch,
    LaunchEnd,
    /// Written once per log-file lifetime, never through the recorder API
    FileInit,
}

impl EventKind {
    /// The `eventType` value as recorded on disk
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::TextChange => "textChange",
            EventKind::FileOpen => "fileOpen",
            EventKind::FileClose => "fileClose",
            EventKind::FileSave => "fileSave",
            EventKind::TestRun => "testRun",
            EventKind::Snapshot => "snapshot",
            EventKind::DebugLaunch => "debugLaunch",
            EventKind::NormalLaunch => "normalLaunch",
            EventKind::LaunchEnd => "launchEnd",
            EventKind::FileInit => "FileInit",
        }
    }
}

/// One structured fact about developer activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event {
    fields: Map<String, Value>,
}

impl Event {
    /// Create an event from an already-assembled field mapping
    ///
    /// Callers normally go through [`EventBuilder`]; this is the escape hatch
    /// for ad-hoc records.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Whether the event carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field value by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Look up a string field by name
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// The `eventType` field, if present
    pub fn event_type(&self) -> Option<&str> {
        self.get_str(fields::EVENT_TYPE)
    }

    /// The full field mapping, in insertion order
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
