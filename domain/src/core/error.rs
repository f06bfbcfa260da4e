//! Domain error types

use crate::session::status::SessionStatus;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable discriminant for [`DomainError`], suitable for transport mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidPhase,
    QuotaExceeded,
    InvalidContent,
    AlreadyVoted,
    WrongSelectionCount,
    Unauthorized,
    NotFound,
    StaleTransition,
    NotEnoughParticipants,
    IneligibleIdea,
    NoIdeas,
    SessionFull,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidPhase => "invalid_phase",
            ErrorKind::QuotaExceeded => "quota_exceeded",
            ErrorKind::InvalidContent => "invalid_content",
            ErrorKind::AlreadyVoted => "already_voted",
            ErrorKind::WrongSelectionCount => "wrong_selection_count",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::NotFound => "not_found",
            ErrorKind::StaleTransition => "stale_transition",
            ErrorKind::NotEnoughParticipants => "not_enough_participants",
            ErrorKind::IneligibleIdea => "ineligible_idea",
            ErrorKind::NoIdeas => "no_ideas",
            ErrorKind::SessionFull => "session_full",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a [`DomainError::NotFound`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Session,
    Participant,
    Idea,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Session => write!(f, "session"),
            Entity::Participant => write!(f, "participant"),
            Entity::Idea => write!(f, "idea"),
        }
    }
}

/// Domain-level errors
///
/// Every error is local to one operation and leaves the session untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("cannot {action} while session is {status}")]
    InvalidPhase {
        action: &'static str,
        status: SessionStatus,
    },

    #[error("idea quota exceeded: at most {quota} ideas per participant")]
    QuotaExceeded { quota: usize },

    #[error("invalid content: {0}")]
    InvalidContent(String),

    #[error("participant has already voted in round {round}")]
    AlreadyVoted { round: u32 },

    #[error("expected {expected} distinct ideas, got {actual}")]
    WrongSelectionCount { expected: usize, actual: usize },

    #[error("only the session owner may {action}")]
    Unauthorized { action: &'static str },

    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },

    #[error("transition to {target} is stale: session is already {status}")]
    StaleTransition {
        target: &'static str,
        status: SessionStatus,
    },

    #[error("at least {required} participants are required, found {actual}")]
    NotEnoughParticipants { required: usize, actual: usize },

    #[error("idea {0} is not a candidate in the current round")]
    IneligibleIdea(String),

    #[error("no ideas have been submitted")]
    NoIdeas,

    #[error("session is full ({max} participants)")]
    SessionFull { max: usize },
}

impl DomainError {
    pub fn not_found(entity: Entity, id: impl ToString) -> Self {
        DomainError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidPhase { .. } => ErrorKind::InvalidPhase,
            DomainError::QuotaExceeded { .. } => ErrorKind::QuotaExceeded,
            DomainError::InvalidContent(_) => ErrorKind::InvalidContent,
            DomainError::AlreadyVoted { .. } => ErrorKind::AlreadyVoted,
            DomainError::WrongSelectionCount { .. } => ErrorKind::WrongSelectionCount,
            DomainError::Unauthorized { .. } => ErrorKind::Unauthorized,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::StaleTransition { .. } => ErrorKind::StaleTransition,
            DomainError::NotEnoughParticipants { .. } => ErrorKind::NotEnoughParticipants,
            DomainError::IneligibleIdea(_) => ErrorKind::IneligibleIdea,
            DomainError::NoIdeas => ErrorKind::NoIdeas,
            DomainError::SessionFull { .. } => ErrorKind::SessionFull,
        }
    }

    /// Stale transitions are benign: the caller lost a race to an
    /// identical transition and should treat the call as a no-op.
    pub fn is_stale(&self) -> bool {
        matches!(self, DomainError::StaleTransition { .. })
    }
}
