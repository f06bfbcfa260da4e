//! In-process session store
//!
//! Each session sits behind its own async mutex, so mutations on one
//! session are serialized while different sessions proceed in parallel:
//!
//! ```text
//! sessions: RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>
//!                                         │
//!             update(id, f) ──lock──▶ clone ─▶ f(&mut draft) ─Ok─▶ commit
//!                                                            └Err─▶ discard
//! ```

use async_trait::async_trait;
use idea_domain::{DomainError, JoinCode, RepositoryError, Session, SessionId, SessionRepository};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, trace};

/// In-memory [`SessionRepository`] with per-session locking
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>,
    join_codes: RwLock<HashMap<JoinCode, SessionId>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    async fn slot(&self, id: SessionId) -> Result<Arc<Mutex<Session>>, RepositoryError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionStore {
    async fn insert(&self, session: Session) -> Result<(), RepositoryError> {
        let id = session.id();
        let code = session.join_code().clone();

        let mut sessions = self.sessions.write().await;
        let mut join_codes = self.join_codes.write().await;
        if sessions.contains_key(&id) {
            return Err(RepositoryError::AlreadyExists(id));
        }
        if let Some(existing) = join_codes.get(&code) {
            debug!("Join code {} already held by session {}", code, existing);
            return Err(RepositoryError::JoinCodeTaken(code));
        }

        sessions.insert(id, Arc::new(Mutex::new(session)));
        join_codes.insert(code, id);
        debug!("Stored session {} ({} total)", id, sessions.len());
        Ok(())
    }

    async fn get(&self, id: SessionId) -> Result<Session, RepositoryError> {
        let slot = self.slot(id).await?;
        let session = slot.lock().await;
        Ok(session.clone())
    }

    async fn find_by_join_code(&self, code: &JoinCode) -> Result<SessionId, RepositoryError> {
        self.join_codes
            .read()
            .await
            .get(code)
            .copied()
            .ok_or_else(|| RepositoryError::UnknownJoinCode(code.clone()))
    }

    async fn update<R, F>(&self, id: SessionId, mutate: F) -> Result<R, RepositoryError>
    where
        R: Send + 'static,
        F: FnOnce(&mut Session) -> Result<R, DomainError> + Send + 'static,
    {
        let slot = self.slot(id).await?;
        let mut current = slot.lock().await;

        let mut draft = current.clone();
        draft.bump_version();
        match mutate(&mut draft) {
            Ok(out) => {
                trace!("Session {} committed at version {}", id, draft.version());
                *current = draft;
                Ok(out)
            }
            Err(e) => {
                trace!("Session {} update rejected: {}", id, e);
                Err(e.into())
            }
        }
    }
}
