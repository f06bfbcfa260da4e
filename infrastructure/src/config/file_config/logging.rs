//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// ```toml
/// [logging]
/// event_log = "./sessions.events.jsonl"
/// file = "./idea-quorum.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving every session event
    pub event_log: Option<PathBuf>,
    /// File receiving the diagnostic (tracing) log
    pub file: Option<PathBuf>,
}
