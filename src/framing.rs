//! Frame one event for the log; scan raw log text back into payloads
//!
//! The on-disk format is an RFC 7464 JSON text sequence: every frame is a
//! record separator (`0x1E`), the compact JSON encoding of one event, and a
//! line feed. `serde_json` escapes all control characters inside JSON
//! strings, so neither sentinel can legally occur in a payload; event text
//! containing raw newlines is escaped to `\n` and cannot split a frame.
//!
//! Scanning is purely delimiter-based and never parses JSON, so frame
//! recovery still works over corrupted or truncated bodies; decoding is a
//! separate step applied per payload.

use crate::error::RecorderResult;
use crate::events::Event;

/// Opens every frame; `serde_json` escapes it as `\u001e` inside strings
pub const FRAME_START: char = '\u{1E}';

/// Terminates every frame; raw newlines in strings are escaped to `\n`
pub const FRAME_END: char = '\n';

/// Serialize one event into a self-delimiting frame
pub fn frame(event: &Event) -> RecorderResult<String> {
    let payload = serde_json::to_string(event)?;
    Ok(format!("{FRAME_START}{payload}{FRAME_END}"))
}

/// Recover every complete JSON payload from raw log text, in file order
///
/// A region between frame-start markers counts only if it is terminated by
/// the frame end. Unterminated regions (a crash mid-write, or the tail of a
/// file still being written) are skipped, not errors. Content before the
/// first marker is ignored.
pub fn scan(raw: &str) -> Vec<&str> {
    let mut regions = raw.split(FRAME_START);
    // Anything before the first marker is not a frame.
    regions.next();

    regions
        .filter_map(|region| region.strip_suffix(FRAME_END))
        .collect()
}

/// Decode one scanned payload back into an event
pub fn decode(payload: &str) -> RecorderResult<Event> {
    Ok(serde_json::from_str(payload)?)
}
