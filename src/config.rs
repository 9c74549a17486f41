//! Session configuration for the recorder

use std::path::PathBuf;

use chrono::Utc;

/// Per-session recorder settings
///
/// `ide` identifies the host environment in every recorded event; the log
/// path is fixed for the session.
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    pub ide: String,
    pub log_path: PathBuf,
}

impl RecorderConfig {
    /// Configure a session with an explicit log path
    pub fn new(ide: impl Into<String>, log_path: impl Into<PathBuf>) -> Self {
        Self {
            ide: ide.into(),
            log_path: log_path.into(),
        }
    }

    /// Configure a session with a timestamped log under the local data dir
    ///
    /// Falls back to the current directory when the platform has no data
    /// directory.
    pub fn for_session(ide: impl Into<String>) -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        let file = format!("events-{}.log", Utc::now().format("%Y%m%d_%H%M%S"));
        Self {
            ide: ide.into(),
            log_path: base.join("devjournal").join(file),
        }
    }
}
