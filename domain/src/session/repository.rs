//! Session repository trait

use super::entities::Session;
use crate::core::error::DomainError;
use crate::core::ids::{JoinCode, SessionId};
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a [`SessionRepository`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("session not found: {0}")]
    NotFound(SessionId),

    #[error("no session with join code {0}")]
    UnknownJoinCode(JoinCode),

    #[error("session already exists: {0}")]
    AlreadyExists(SessionId),

    /// Another stored session already uses this join code
    #[error("join code {0} is already in use")]
    JoinCodeTaken(JoinCode),

    /// The mutation itself was rejected; nothing was written
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Repository trait for sessions
///
/// This is a domain-level abstraction over session persistence.
/// Implementations live in the infrastructure layer.
///
/// # Atomicity contract
///
/// [`update`](Self::update) is the only way to change a stored session. It
/// must run `mutate` with exclusive access to the session (per-session lock,
/// actor, or a serializable transaction) and commit the result only when
/// `mutate` returns `Ok`. A rejected mutation leaves the stored session
/// exactly as it was. Committed updates bump the session's version; the
/// bump is applied to the working copy before `mutate` runs, so a snapshot
/// taken inside `mutate` carries the version being committed.
///
/// Reads ([`get`](Self::get)) return the latest committed state and need
/// not be synchronized with writers.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Store a freshly created session
    ///
    /// Fails with [`RepositoryError::JoinCodeTaken`] when the session's join
    /// code is held by another session; nothing is stored in that case.
    async fn insert(&self, session: Session) -> Result<(), RepositoryError>;

    /// Latest committed state of a session
    async fn get(&self, id: SessionId) -> Result<Session, RepositoryError>;

    /// Resolve a join code to its session
    async fn find_by_join_code(&self, code: &JoinCode) -> Result<SessionId, RepositoryError>;

    /// Atomically read, modify and write one session
    async fn update<R, F>(&self, id: SessionId, mutate: F) -> Result<R, RepositoryError>
    where
        R: Send + 'static,
        F: FnOnce(&mut Session) -> Result<R, DomainError> + Send + 'static;
}
