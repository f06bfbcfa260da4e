//! Run Session use case
//!
//! Exposes the session operations to transports and drives the lifecycle:
//!
//! | Operation              | Phase required      | Atomic unit            |
//! |------------------------|---------------------|------------------------|
//! | `create_session`       | –                   | insert                 |
//! | `join_session`         | Waiting             | session update         |
//! | `start_session`        | Waiting (owner)     | session update         |
//! | `submit_idea`          | SubmittingIdeas     | quota check + insert   |
//! | `begin_voting`         | SubmittingIdeas (owner) | session update     |
//! | `submit_vote`          | Voting              | ballot insert + round trigger |
//! | `get_session_snapshot` | any                 | unsynchronized read    |
//!
//! Every mutation goes through [`SessionRepository::update`], which gives
//! the closure exclusive access to one session and commits only on success.

mod ideas;
mod types;
mod voting;

#[cfg(test)]
pub(crate) mod test_support;

pub use types::{RunSessionError, VoteOutcome};

use crate::config::SessionParams;
use crate::ports::notifier::{NoNotifier, SessionNotifier};
use idea_domain::{
    JoinCode, Participant, ParticipantId, RepositoryError, Session, SessionEvent, SessionId,
    SessionRepository, SessionSnapshot,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Join codes drawn per session before a collision is reported
pub const JOIN_CODE_ATTEMPTS: usize = 8;

/// Use case for running group decision sessions
pub struct RunSessionUseCase<R: SessionRepository + 'static> {
    pub(super) repository: Arc<R>,
    pub(super) notifier: Arc<dyn SessionNotifier>,
    pub(super) params: SessionParams,
}

impl<R: SessionRepository + 'static> Clone for RunSessionUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            notifier: self.notifier.clone(),
            params: self.params.clone(),
        }
    }
}

impl<R: SessionRepository + 'static> RunSessionUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            notifier: Arc::new(NoNotifier),
            params: SessionParams::default(),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn SessionNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_params(mut self, params: SessionParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &SessionParams {
        &self.params
    }

    /// Open a new session owned by `owner`
    ///
    /// A join code that collides with a stored session is redrawn, up to
    /// [`JOIN_CODE_ATTEMPTS`] times.
    pub async fn create_session(
        &self,
        owner: Participant,
    ) -> Result<SessionSnapshot, RunSessionError> {
        let owner_id = owner.id;
        let mut attempt = 1;
        let session = loop {
            let session = Session::new(
                owner.clone(),
                JoinCode::generate(self.params.join_code_length),
            )
            .with_max_participants(self.params.max_participants);

            match self.repository.insert(session.clone()).await {
                Ok(()) => break session,
                Err(RepositoryError::JoinCodeTaken(code)) if attempt < JOIN_CODE_ATTEMPTS => {
                    debug!(
                        "Join code {} is taken, drawing another (attempt {}/{})",
                        code, attempt, JOIN_CODE_ATTEMPTS
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        };
        let snapshot = session.snapshot();
        let join_code = session.join_code().clone();

        info!(
            "Session {} created by {} (join code {})",
            snapshot.id, owner_id, snapshot.join_code
        );

        self.notifier.notify(&SessionEvent::SessionCreated {
            session: snapshot.id,
            owner: owner_id,
            join_code,
        });
        Ok(snapshot)
    }

    /// Add `participant` to a waiting session
    ///
    /// Joining twice is harmless and returns the unchanged session.
    pub async fn join_session(
        &self,
        session_id: SessionId,
        participant: Participant,
    ) -> Result<SessionSnapshot, RunSessionError> {
        let participant_id = participant.id;
        let name = participant.name.to_string();

        let (joined, snapshot) = self
            .repository
            .update(session_id, move |session| {
                let joined = session.join(participant)?;
                Ok((joined, session.snapshot()))
            })
            .await?;

        if joined {
            info!(
                "{} joined session {} ({} participants)",
                name,
                session_id,
                snapshot.participants.len()
            );
            self.notifier.notify(&SessionEvent::ParticipantJoined {
                session: session_id,
                participant: participant_id,
                name,
                participants: snapshot.participants.len(),
            });
        } else {
            debug!("{} is already in session {}", participant_id, session_id);
        }
        Ok(snapshot)
    }

    /// Join the session behind a join code
    pub async fn join_by_code(
        &self,
        code: &JoinCode,
        participant: Participant,
    ) -> Result<SessionSnapshot, RunSessionError> {
        let session_id = self.repository.find_by_join_code(code).await?;
        self.join_session(session_id, participant).await
    }

    /// Move a waiting session into idea submission (owner only)
    pub async fn start_session(
        &self,
        session_id: SessionId,
        requester: ParticipantId,
    ) -> Result<SessionSnapshot, RunSessionError> {
        let result = self
            .repository
            .update(session_id, move |session| {
                session.start(requester)?;
                Ok(session.snapshot())
            })
            .await;

        let Some(snapshot) = self.committed_or_stale(session_id, result)? else {
            return self.get_session_snapshot(session_id).await;
        };

        let quota = snapshot.idea_quota.unwrap_or_default();
        info!(
            "Session {} started: {} participants, {} ideas each",
            session_id,
            snapshot.participants.len(),
            quota
        );
        self.notifier.notify(&SessionEvent::SessionStarted {
            session: session_id,
            participants: snapshot.participants.len(),
            idea_quota: quota,
        });
        Ok(snapshot)
    }

    /// Close idea submission and open voting round 1 (owner only)
    pub async fn begin_voting(
        &self,
        session_id: SessionId,
        requester: ParticipantId,
    ) -> Result<SessionSnapshot, RunSessionError> {
        let result = self
            .repository
            .update(session_id, move |session| {
                session.begin_voting(requester)?;
                Ok(session.snapshot())
            })
            .await;

        let Some(snapshot) = self.committed_or_stale(session_id, result)? else {
            return self.get_session_snapshot(session_id).await;
        };

        info!(
            "Session {} voting round 1 on {} candidates",
            session_id,
            snapshot.candidates.len()
        );
        self.notifier.notify(&SessionEvent::VotingStarted {
            session: session_id,
            round: snapshot.current_round,
            candidates: snapshot.candidates.iter().map(|c| c.id).collect(),
            required_votes: snapshot.required_votes.unwrap_or_default(),
        });
        Ok(snapshot)
    }

    /// Latest committed view of a session
    pub async fn get_session_snapshot(
        &self,
        session_id: SessionId,
    ) -> Result<SessionSnapshot, RunSessionError> {
        let session = self.repository.get(session_id).await?;
        Ok(session.snapshot())
    }

    /// Map a stale transition to `Ok(None)`; other errors pass through
    fn committed_or_stale<T>(
        &self,
        session_id: SessionId,
        result: Result<T, RepositoryError>,
    ) -> Result<Option<T>, RunSessionError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(RepositoryError::Domain(e)) if e.is_stale() => {
                debug!("Ignoring stale transition on session {}: {}", session_id, e);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
