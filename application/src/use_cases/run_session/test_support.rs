//! Shared fixtures for use case tests

use super::RunSessionUseCase;
use crate::ports::notifier::tests::RecordingNotifier;
use async_trait::async_trait;
use idea_domain::{
    DomainError, IdeaId, JoinCode, Participant, ParticipantId, RepositoryError, Session, SessionId,
    SessionRepository,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// Single-lock repository, enough to exercise the use case
#[derive(Default)]
pub(crate) struct TestRepository {
    sessions: Mutex<HashMap<SessionId, Session>>,
    fail_update: AtomicBool,
    /// Inserts left to reject as join code collisions
    taken_codes: Mutex<usize>,
}

impl TestRepository {
    /// Make the next update fail with a backend error before committing
    pub(crate) fn fail_next_update(&self) {
        self.fail_update.store(true, Ordering::SeqCst);
    }

    /// Reject the next `n` inserts as if their join code were in use
    pub(crate) async fn collide_join_codes(&self, n: usize) {
        *self.taken_codes.lock().await = n;
    }
}

#[async_trait]
impl SessionRepository for TestRepository {
    async fn insert(&self, session: Session) -> Result<(), RepositoryError> {
        let mut taken = self.taken_codes.lock().await;
        if *taken > 0 {
            *taken -= 1;
            return Err(RepositoryError::JoinCodeTaken(session.join_code().clone()));
        }
        drop(taken);

        let mut sessions = self.sessions.lock().await;
        if sessions.contains_key(&session.id()) {
            return Err(RepositoryError::AlreadyExists(session.id()));
        }
        sessions.insert(session.id(), session);
        Ok(())
    }

    async fn get(&self, id: SessionId) -> Result<Session, RepositoryError> {
        self.sessions
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn find_by_join_code(&self, code: &JoinCode) -> Result<SessionId, RepositoryError> {
        self.sessions
            .lock()
            .await
            .values()
            .find(|s| s.join_code() == code)
            .map(|s| s.id())
            .ok_or_else(|| RepositoryError::UnknownJoinCode(code.clone()))
    }

    async fn update<R, F>(&self, id: SessionId, mutate: F) -> Result<R, RepositoryError>
    where
        R: Send + 'static,
        F: FnOnce(&mut Session) -> Result<R, DomainError> + Send + 'static,
    {
        if self.fail_update.swap(false, Ordering::SeqCst) {
            return Err(RepositoryError::Backend("transient".to_string()));
        }
        let mut sessions = self.sessions.lock().await;
        let current = sessions.get_mut(&id).ok_or(RepositoryError::NotFound(id))?;
        let mut draft = current.clone();
        draft.bump_version();
        let out = mutate(&mut draft)?;
        *current = draft;
        Ok(out)
    }
}

pub(crate) type TestUseCase = RunSessionUseCase<TestRepository>;

/// A waiting session with only its owner
pub(crate) async fn setup() -> (TestUseCase, Arc<RecordingNotifier>, SessionId, ParticipantId) {
    let notifier = Arc::new(RecordingNotifier::default());
    let use_case =
        RunSessionUseCase::new(Arc::new(TestRepository::default())).with_notifier(notifier.clone());
    let owner = Participant::named("Owner").unwrap();
    let owner_id = owner.id;
    let snapshot = use_case.create_session(owner).await.unwrap();
    (use_case, notifier, snapshot.id, owner_id)
}

/// A session with `n` participants accepting ideas; `members[0]` owns it
pub(crate) async fn setup_started(
    n: usize,
) -> (TestUseCase, Arc<RecordingNotifier>, SessionId, Vec<ParticipantId>) {
    let (use_case, notifier, session_id, owner) = setup().await;
    let mut members = vec![owner];
    for i in 1..n {
        let participant = Participant::named(&format!("Member {}", i)).unwrap();
        members.push(participant.id);
        use_case.join_session(session_id, participant).await.unwrap();
    }
    use_case.start_session(session_id, owner).await.unwrap();
    (use_case, notifier, session_id, members)
}

/// A session in voting round 1 on `texts`, submitted round-robin
pub(crate) async fn setup_voting(
    n: usize,
    texts: &[&str],
) -> (
    TestUseCase,
    Arc<RecordingNotifier>,
    SessionId,
    Vec<ParticipantId>,
    Vec<IdeaId>,
) {
    let (use_case, notifier, session_id, members) = setup_started(n).await;
    let mut ideas = Vec::new();
    for (i, text) in texts.iter().enumerate() {
        let idea = use_case
            .submit_idea(session_id, members[i % n], text)
            .await
            .unwrap();
        ideas.push(idea.id);
    }
    use_case.begin_voting(session_id, members[0]).await.unwrap();
    (use_case, notifier, session_id, members, ideas)
}
