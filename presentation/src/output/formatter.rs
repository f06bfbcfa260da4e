//! Output formatter trait

use super::console::ConsoleFormatter;
use idea_application::VoteOutcome;
use idea_domain::{OutputFormat, SessionSnapshot};

/// Trait for rendering session state
pub trait OutputFormatter: Send + Sync {
    /// Render a full session snapshot
    fn format_snapshot(&self, snapshot: &SessionSnapshot) -> String;

    /// Render the result of one ballot
    fn format_vote(&self, outcome: &VoteOutcome, snapshot: &SessionSnapshot) -> String;
}

/// Machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json<T: serde::Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_snapshot(&self, snapshot: &SessionSnapshot) -> String {
        Self::to_json(snapshot)
    }

    fn format_vote(&self, outcome: &VoteOutcome, _snapshot: &SessionSnapshot) -> String {
        Self::to_json(outcome)
    }
}

/// Formatter for the selected output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
