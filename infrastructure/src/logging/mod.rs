//! Logging infrastructure: structured session event logging.
//!
//! Provides [`JsonlSessionEventLog`], a JSONL file writer that implements
//! the [`SessionNotifier`](idea_application::SessionNotifier) port.

mod jsonl_event_log;

pub use jsonl_event_log::JsonlSessionEventLog;
