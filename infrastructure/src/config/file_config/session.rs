//! Session configuration from TOML (`[session]` section)
//!
//! ```toml
//! [session]
//! join_code_length = 6
//! max_participants = 12
//! ```

use idea_application::SessionParams;
use serde::{Deserialize, Serialize};

/// Raw session configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Characters in generated join codes
    pub join_code_length: usize,
    /// Optional cap on participants per session, owner included
    pub max_participants: Option<usize>,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        let params = SessionParams::default();
        Self {
            join_code_length: params.join_code_length,
            max_participants: params.max_participants,
        }
    }
}

impl FileSessionConfig {
    /// Convert to application session parameters
    pub fn to_session_params(&self) -> SessionParams {
        SessionParams::default()
            .with_join_code_length(self.join_code_length)
            .with_max_participants(self.max_participants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_default_matches_params() {
        let config = FileSessionConfig::default();
        assert_eq!(config.to_session_params(), SessionParams::default());
    }

    #[test]
    fn test_session_config_to_params() {
        let toml_str = r#"
[session]
join_code_length = 8
max_participants = 5
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let params = config.session.to_session_params();
        assert_eq!(params.join_code_length, 8);
        assert_eq!(params.max_participants, Some(5));
    }
}
