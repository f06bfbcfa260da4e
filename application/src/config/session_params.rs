//! Session creation parameters

use idea_domain::core::ids::{MAX_JOIN_CODE_LENGTH, MIN_JOIN_CODE_LENGTH};
use idea_domain::quorum::MIN_PARTICIPANTS;

/// Controls how new sessions are set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionParams {
    /// Length of generated join codes.
    pub join_code_length: usize,
    /// Upper bound on participants per session (owner included).
    pub max_participants: Option<usize>,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            join_code_length: 6,
            max_participants: None,
        }
    }
}

impl SessionParams {
    pub fn with_join_code_length(mut self, length: usize) -> Self {
        self.join_code_length = length.clamp(MIN_JOIN_CODE_LENGTH, MAX_JOIN_CODE_LENGTH);
        self
    }

    /// Cap participants per session. Caps below the minimum session size
    /// are raised to it so a session can always be started.
    pub fn with_max_participants(mut self, max: Option<usize>) -> Self {
        self.max_participants = max.map(|m| m.max(MIN_PARTICIPANTS));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SessionParams::default();
        assert_eq!(params.join_code_length, 6);
        assert!(params.max_participants.is_none());
    }

    #[test]
    fn test_builders_clamp() {
        let params = SessionParams::default()
            .with_join_code_length(50)
            .with_max_participants(Some(1));
        assert_eq!(params.join_code_length, MAX_JOIN_CODE_LENGTH);
        assert_eq!(params.max_participants, Some(MIN_PARTICIPANTS));
    }
}
