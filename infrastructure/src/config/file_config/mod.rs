//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod console;
mod logging;
mod session;

pub use console::{FileOutputConfig, FileReplConfig};
pub use logging::FileLoggingConfig;
pub use session::FileSessionConfig;

use idea_domain::core::ids::{MAX_JOIN_CODE_LENGTH, MIN_JOIN_CODE_LENGTH};
use idea_domain::quorum::MIN_PARTICIPANTS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("session.join_code_length must be between 4 and 12, got {0}")]
    InvalidJoinCodeLength(usize),

    #[error("session.max_participants must be at least 2, got {0}")]
    InvalidMaxParticipants(usize),

    #[error("{0} cannot be an empty path")]
    EmptyPath(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Session creation settings
    pub session: FileSessionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let length = self.session.join_code_length;
        if !(MIN_JOIN_CODE_LENGTH..=MAX_JOIN_CODE_LENGTH).contains(&length) {
            return Err(ConfigValidationError::InvalidJoinCodeLength(length));
        }

        if let Some(max) = self.session.max_participants
            && max < MIN_PARTICIPANTS
        {
            return Err(ConfigValidationError::InvalidMaxParticipants(max));
        }

        let paths = [
            ("logging.event_log", &self.logging.event_log),
            ("logging.file", &self.logging.file),
        ];
        for (field, path) in paths {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(ConfigValidationError::EmptyPath(field));
            }
        }
        if self
            .repl
            .history_file
            .as_ref()
            .is_some_and(|p| p.trim().is_empty())
        {
            return Err(ConfigValidationError::EmptyPath("repl.history_file"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idea_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[session]
join_code_length = 5
max_participants = 10

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/idea-quorum/history.txt"

[logging]
event_log = "events.jsonl"
file = "idea-quorum.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.join_code_length, 5);
        assert_eq!(config.session.max_participants, Some(10));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.logging.event_log.as_deref(),
            Some(std::path::Path::new("events.jsonl"))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[output]
format = "text"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert_eq!(config.session.join_code_length, 6);
        assert!(config.session.max_participants.is_none());
        assert!(config.output.color);
        assert!(config.repl.show_progress);
        assert!(config.logging.event_log.is_none());
    }

    #[test]
    fn test_validate_default_config() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_join_code_length() {
        let toml_str = r#"
[session]
join_code_length = 3
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidJoinCodeLength(3))
        );
    }

    #[test]
    fn test_validate_max_participants() {
        let toml_str = r#"
[session]
max_participants = 1
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidMaxParticipants(1))
        );
    }

    #[test]
    fn test_validate_empty_history_file() {
        let toml_str = r#"
[repl]
history_file = "  "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyPath("repl.history_file"))
        );
    }
}
