//! JSONL file writer for session events.
//!
//! Each [`SessionEvent`] is serialized as a single JSON line carrying its
//! `type` tag plus a `timestamp`, appended through a buffered writer.

use idea_application::SessionNotifier;
use idea_domain::SessionEvent;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Session event log that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlSessionEventLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlSessionEventLog {
    /// Open the log at `path` for appending.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create event log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open event log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: &SessionEvent) -> Option<String> {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let mut value = serde_json::to_value(event).ok()?;
        if let serde_json::Value::Object(map) = &mut value {
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
        }
        serde_json::to_string(&value).ok()
    }
}

impl SessionNotifier for JsonlSessionEventLog {
    fn notify(&self, event: &SessionEvent) {
        let Some(line) = Self::record(event) else {
            warn!("Dropping unserializable {} event", event.event_type());
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Append-only: flush every line so a crash loses nothing
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlSessionEventLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idea_domain::{Decision, IdeaId, ParticipantId, SessionId};

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_event_log_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.events.jsonl");
        let log = JsonlSessionEventLog::open(&path).unwrap();
        let session = SessionId::new();
        let winner = IdeaId::new();

        log.notify(&SessionEvent::VoteAccepted {
            session,
            round: 1,
            voter: ParticipantId::new(),
            voters: 1,
            participants: 3,
        });
        log.notify(&SessionEvent::RoundAdvanced {
            session,
            resolved_round: 1,
            decision: Decision::Finalize {
                winners: vec![winner],
            },
            locked_winners: 1,
        });
        drop(log);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(line.get("timestamp").is_some());
            assert_eq!(line["session"], session.to_string());
        }
        assert_eq!(lines[0]["type"], "vote_accepted");
        assert_eq!(lines[0]["participants"], 3);
        assert_eq!(lines[1]["type"], "round_advanced");
        assert_eq!(lines[1]["decision"]["action"], "finalize");
        assert_eq!(lines[1]["decision"]["winners"][0], winner.to_string());
    }

    #[test]
    fn test_event_log_appends_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("events.jsonl");
        let event = SessionEvent::SessionCompleted {
            session: SessionId::new(),
            winners: vec![],
        };

        let log = JsonlSessionEventLog::open(&path).unwrap();
        assert_eq!(log.path(), path.as_path());
        log.notify(&event);
        drop(log);

        let log = JsonlSessionEventLog::open(&path).unwrap();
        log.notify(&event);
        drop(log);

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_event_log_rejects_directory_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlSessionEventLog::open(dir.path()).is_none());
    }
}
