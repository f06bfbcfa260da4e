//! Input/output and error types for [`RunSessionUseCase`](super::RunSessionUseCase).

use idea_domain::{Decision, DomainError, Entity, ErrorKind, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Errors returned by session operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunSessionError {
    /// The request was rejected by a session rule; retry with corrected input
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("storage error: {0}")]
    Storage(String),
}

impl RunSessionError {
    /// Domain error kind, if this is a rule violation
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            RunSessionError::Domain(e) => Some(e.kind()),
            RunSessionError::Storage(_) => None,
        }
    }

    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            RunSessionError::Domain(e) => Some(e),
            RunSessionError::Storage(_) => None,
        }
    }
}

impl From<RepositoryError> for RunSessionError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(id) => {
                RunSessionError::Domain(DomainError::not_found(Entity::Session, id))
            }
            RepositoryError::UnknownJoinCode(code) => {
                RunSessionError::Domain(DomainError::not_found(Entity::Session, code))
            }
            RepositoryError::Domain(e) => RunSessionError::Domain(e),
            other @ (RepositoryError::AlreadyExists(_)
            | RepositoryError::JoinCodeTaken(_)
            | RepositoryError::Backend(_)) => {
                RunSessionError::Storage(other.to_string())
            }
        }
    }
}

/// Result of [`submit_vote`](super::RunSessionUseCase::submit_vote)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteOutcome {
    /// The ballot was recorded
    pub accepted: bool,
    /// Round the ballot was counted in
    pub round: u32,
    /// Ballots in that round once this one was recorded
    pub voters: usize,
    /// This call completed the round and applied its resolution
    pub round_advanced: bool,
    /// The applied resolution, when `round_advanced`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,
}

impl VoteOutcome {
    pub(super) fn recorded(round: u32, voters: usize) -> Self {
        Self {
            accepted: true,
            round,
            voters,
            round_advanced: false,
            decision: None,
        }
    }

    pub(super) fn advanced(round: u32, voters: usize, decision: Decision) -> Self {
        Self {
            accepted: true,
            round,
            voters,
            round_advanced: true,
            decision: Some(decision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idea_domain::SessionId;

    #[test]
    fn test_repository_not_found_becomes_domain_not_found() {
        let error: RunSessionError = RepositoryError::NotFound(SessionId::new()).into();
        assert_eq!(error.kind(), Some(ErrorKind::NotFound));
    }

    #[test]
    fn test_backend_failure_is_storage() {
        let error: RunSessionError = RepositoryError::Backend("disk full".to_string()).into();
        assert_eq!(error.kind(), None);
        assert!(error.to_string().contains("disk full"));
    }

    #[test]
    fn test_vote_outcome_json_shape() {
        let json = serde_json::to_value(VoteOutcome::recorded(2, 1)).unwrap();
        assert_eq!(json["accepted"], true);
        assert_eq!(json["voters"], 1);
        assert_eq!(json["round_advanced"], false);
        assert!(json.get("decision").is_none());
    }
}
