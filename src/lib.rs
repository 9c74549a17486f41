//! # devjournal
//!
//! A durable, append-only journal of fine-grained developer-activity events
//! (text edits, file open/close/save, test runs, launches, snapshots) for
//! later offline analysis.
//!
//! Events are JSON objects framed as an RFC 7464 text sequence in a
//! per-session log file. The engine is single-process and synchronous: a
//! `record_*` call builds the event, takes the gateway lock, makes sure the
//! log file exists (first frame is always the `FileInit` marker, re-emitted
//! if the file was deleted externally) and appends one complete frame.
//!
//! ## Usage
//!
//! ```no_run
//! use devjournal::{ActivityRecorder, RecorderConfig};
//!
//! let recorder = ActivityRecorder::with_config(RecorderConfig::for_session("eclipse"));
//! recorder.record_file_open("/workspace/project/src/main.rs")?;
//! recorder.record_text_change("fn main() {}", 0, 0, "/workspace/project/src/main.rs", "user")?;
//! # Ok::<(), devjournal::RecorderError>(())
//! ```
//!
//! ## Modules
//!
//! - `events` - Event model and per-kind builders with field validation
//! - `framing` - Self-delimiting frame encoding and crash-tolerant scanning
//! - `store` - Durable append and recovery for one session's log file
//! - `gateway` - Shared, lock-guarded persistence entry point
//! - `recorder` - The `record_*` API consumed by host-IDE hooks
//! - `storage` - Backend seam: real filesystem or in-memory for tests
//! - `config` - IDE identifier and session log path

pub mod config;
pub mod error;
pub mod events;
pub mod framing;
pub mod gateway;
pub mod recorder;
pub mod storage;
pub mod store;

pub use config::RecorderConfig;
pub use error::{RecorderError, RecorderResult};
pub use events::{Event, EventBuilder, EventKind};
pub use gateway::PersistenceGateway;
pub use recorder::ActivityRecorder;
pub use storage::{FileBackend, MemoryBackend, StorageBackend};
pub use store::LogStore;
