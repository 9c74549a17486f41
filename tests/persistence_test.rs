//! Gateway persistence tests against the in-memory storage seam
//!
//! Exercises the same contract the real filesystem sees: marker-first
//! initialization, idempotent re-init, recovery after external deletion and
//! rejection of empty events, all with no real I/O.

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Map};

use devjournal::{
    Event, EventBuilder, LogStore, MemoryBackend, PersistenceGateway, StorageBackend,
};

const LOG_PATH: &str = "/virtual/session.log";

fn gateway_with_memory() -> (Arc<PersistenceGateway>, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new());
    let store = LogStore::new(
        LOG_PATH,
        backend.clone() as Arc<dyn StorageBackend>,
        EventBuilder::new("testEditor"),
    );
    (Arc::new(PersistenceGateway::new(store)), backend)
}

fn ad_hoc_event(key: &str, value: &str) -> Event {
    let mut fields = Map::new();
    fields.insert(key.to_string(), json!(value));
    Event::from_fields(fields)
}

#[test]
fn init_writes_the_marker_as_first_and_only_frame() {
    let (gateway, _backend) = gateway_with_memory();

    gateway.ensure_initialized().unwrap();

    let events = gateway.scan_events().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type(), Some("FileInit"));
}

#[test]
fn repeated_init_never_duplicates_the_marker() {
    let (gateway, _backend) = gateway_with_memory();

    for _ in 0..5 {
        gateway.ensure_initialized().unwrap();
    }

    assert_eq!(gateway.scan_events().unwrap().len(), 1);
}

#[test]
fn persist_one_record() {
    let (gateway, _backend) = gateway_with_memory();

    gateway.persist(&ad_hoc_event("test", "fileIO")).unwrap();

    let events = gateway.scan_events().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_type(), Some("FileInit"));
    assert_eq!(events[1].get_str("test"), Some("fileIO"));
}

#[test]
fn persist_two_records_in_order() {
    let (gateway, _backend) = gateway_with_memory();

    gateway.persist(&ad_hoc_event("test", "fileIO")).unwrap();
    gateway.persist(&ad_hoc_event("test2", "fileIO2")).unwrap();

    let events = gateway.scan_events().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].event_type(), Some("FileInit"));
    assert_eq!(events[1].get_str("test"), Some("fileIO"));
    assert_eq!(events[2].get_str("test2"), Some("fileIO2"));
}

#[test]
fn external_deletion_is_recovered_on_next_persist() {
    let (gateway, backend) = gateway_with_memory();

    gateway.persist(&ad_hoc_event("before", "deleted")).unwrap();
    backend.remove(Path::new(LOG_PATH)).unwrap();

    gateway.persist(&ad_hoc_event("after", "recovery")).unwrap();

    // Prior history is gone; the fresh file is marker plus the new event.
    let events = gateway.scan_events().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_type(), Some("FileInit"));
    assert_eq!(events[1].get_str("after"), Some("recovery"));
}

#[test]
fn empty_event_is_rejected_and_frame_count_unchanged() {
    let (gateway, _backend) = gateway_with_memory();
    gateway.ensure_initialized().unwrap();

    let err = gateway.persist(&Event::from_fields(Map::new())).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(gateway.scan_events().unwrap().len(), 1);
}

#[test]
fn builder_events_survive_the_round_trip() {
    let (gateway, _backend) = gateway_with_memory();
    let builder = EventBuilder::new("testEditor");

    gateway
        .persist(&builder.test_run("suite::case_one", "pass").unwrap())
        .unwrap();

    let events = gateway.scan_events().unwrap();
    let test_run = &events[1];
    assert_eq!(test_run.get_str("IDE"), Some("testEditor"));
    assert_eq!(test_run.event_type(), Some("testRun"));
    assert_eq!(test_run.get_str("entityAddress"), Some("suite::case_one"));
    assert_eq!(test_run.get_str("testResult"), Some("pass"));
}

#[test]
fn backend_substitution_covers_existence_checks() {
    let (gateway, original) = gateway_with_memory();
    gateway.persist(&ad_hoc_event("on", "original")).unwrap();

    let substitute = Arc::new(MemoryBackend::new());
    gateway.replace_backend(substitute.clone() as Arc<dyn StorageBackend>);
    gateway.persist(&ad_hoc_event("on", "substitute")).unwrap();

    // The substitute got its own marker; the original log is untouched.
    assert_eq!(gateway.scan_events().unwrap().len(), 2);
    assert!(original.exists(Path::new(LOG_PATH)));
    assert!(substitute.exists(Path::new(LOG_PATH)));
}
