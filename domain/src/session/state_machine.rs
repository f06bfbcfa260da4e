//! Session lifecycle transitions
//!
//! ```text
//! Waiting ──start()──▶ SubmittingIdeas ──begin_voting()──▶ Voting(1)
//!                                                            │
//!                         advance_round(NewRound/LockPartial)│──▶ Voting(n+1)
//!                         advance_round(Finalize)            │──▶ Completed
//! ```
//!
//! Status only moves forward. A transition whose pre-state the session has
//! already left is reported as [`DomainError::StaleTransition`] and changes
//! nothing; one whose pre-state has not been reached yet is
//! [`DomainError::InvalidPhase`].

use super::entities::Session;
use super::status::SessionStatus;
use crate::core::error::DomainError;
use crate::core::ids::{IdeaId, ParticipantId};
use crate::quorum::{Decision, MIN_PARTICIPANTS, ResultAccumulator};
use std::cmp::Ordering;

impl Session {
    fn expect_status(
        &self,
        expected: SessionStatus,
        action: &'static str,
        target: &'static str,
    ) -> Result<(), DomainError> {
        match self.status.cmp(&expected) {
            Ordering::Equal => Ok(()),
            Ordering::Less => Err(DomainError::InvalidPhase {
                action,
                status: self.status,
            }),
            Ordering::Greater => Err(DomainError::StaleTransition {
                target,
                status: self.status,
            }),
        }
    }

    fn require_owner(&self, requester: ParticipantId, action: &'static str) -> Result<(), DomainError> {
        if requester == self.owner {
            Ok(())
        } else {
            Err(DomainError::Unauthorized { action })
        }
    }

    /// Waiting → SubmittingIdeas (owner only, at least two participants)
    pub fn start(&mut self, requester: ParticipantId) -> Result<(), DomainError> {
        self.require_owner(requester, "start the session")?;
        self.expect_status(SessionStatus::Waiting, "start the session", "submitting_ideas")?;

        let actual = self.participants.len();
        if actual < MIN_PARTICIPANTS {
            return Err(DomainError::NotEnoughParticipants {
                required: MIN_PARTICIPANTS,
                actual,
            });
        }

        self.status = SessionStatus::SubmittingIdeas;
        Ok(())
    }

    /// SubmittingIdeas → Voting round 1 (owner only)
    ///
    /// Every submitted idea becomes a candidate. Returns the candidate set.
    pub fn begin_voting(&mut self, requester: ParticipantId) -> Result<Vec<IdeaId>, DomainError> {
        self.require_owner(requester, "begin voting")?;
        self.expect_status(SessionStatus::SubmittingIdeas, "begin voting", "voting")?;

        if self.ideas.is_empty() {
            return Err(DomainError::NoIdeas);
        }

        let candidates: Vec<IdeaId> = self.ideas.iter().map(|i| i.id).collect();
        self.results = ResultAccumulator::new(candidates.clone());
        self.current_round = 1;
        self.votes.clear();
        self.round_voters.clear();
        self.status = SessionStatus::Voting;
        Ok(candidates)
    }

    /// Apply the decision that resolved `round`
    ///
    /// `Finalize` completes the session; `NewRound` and `LockPartial` open
    /// the next round on the decision's candidates. Votes of the resolved
    /// round are dropped.
    pub fn advance_round(&mut self, round: u32, decision: &Decision) -> Result<(), DomainError> {
        self.expect_status(SessionStatus::Voting, "advance the round", "next_round")?;
        if self.current_round != round {
            return Err(DomainError::StaleTransition {
                target: "next_round",
                status: self.status,
            });
        }

        self.results.apply(decision);
        self.votes.clear();
        self.round_voters.clear();

        if decision.is_final() {
            self.status = SessionStatus::Completed;
        } else {
            self.current_round += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::JoinCode;
    use crate::session::entities::Participant;

    fn session_with(n: usize) -> (Session, Vec<ParticipantId>) {
        let owner = Participant::named("Owner").unwrap();
        let mut ids = vec![owner.id];
        let mut session = Session::new(owner, JoinCode::generate(6));
        for i in 1..n {
            let p = Participant::named(&format!("P{}", i)).unwrap();
            ids.push(p.id);
            session.join(p).unwrap();
        }
        (session, ids)
    }

    #[test]
    fn test_start_requires_owner() {
        let (mut session, ids) = session_with(3);
        let err = session.start(ids[1]).unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized { .. }));
        assert_eq!(session.status(), SessionStatus::Waiting);
    }

    #[test]
    fn test_start_requires_two_participants() {
        let (mut session, ids) = session_with(1);
        let err = session.start(ids[0]).unwrap_err();
        assert_eq!(
            err,
            DomainError::NotEnoughParticipants {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_start_twice_is_stale() {
        let (mut session, ids) = session_with(2);
        session.start(ids[0]).unwrap();
        assert_eq!(session.status(), SessionStatus::SubmittingIdeas);

        let err = session.start(ids[0]).unwrap_err();
        assert!(err.is_stale());
        assert_eq!(session.status(), SessionStatus::SubmittingIdeas);
    }

    #[test]
    fn test_begin_voting_before_start_is_invalid_phase() {
        let (mut session, ids) = session_with(2);
        let err = session.begin_voting(ids[0]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidPhase { .. }));
    }

    #[test]
    fn test_begin_voting_requires_ideas() {
        let (mut session, ids) = session_with(2);
        session.start(ids[0]).unwrap();
        assert_eq!(session.begin_voting(ids[0]).unwrap_err(), DomainError::NoIdeas);
    }

    #[test]
    fn test_begin_voting_uses_all_ideas() {
        let (mut session, ids) = session_with(2);
        session.start(ids[0]).unwrap();
        let a = session.submit_idea(ids[0], "First idea").unwrap();
        let b = session.submit_idea(ids[1], "Second idea").unwrap();

        let candidates = session.begin_voting(ids[0]).unwrap();
        assert_eq!(candidates, vec![a.id, b.id]);
        assert_eq!(session.status(), SessionStatus::Voting);
        assert_eq!(session.current_round(), 1);
        assert_eq!(session.candidate_ideas(), &[a.id, b.id]);
    }

    #[test]
    fn test_advance_round_new_round_and_finalize() {
        let (mut session, ids) = session_with(2);
        session.start(ids[0]).unwrap();
        let mut ideas = Vec::new();
        for text in ["Alpha", "Bravo", "Charlie", "Delta"] {
            ideas.push(session.submit_idea(ids[0], text).unwrap().id);
        }
        session.begin_voting(ids[0]).unwrap();

        session
            .advance_round(
                1,
                &Decision::LockPartial {
                    winners: vec![ideas[0]],
                    candidates: vec![ideas[1], ideas[2], ideas[3]],
                },
            )
            .unwrap();
        assert_eq!(session.status(), SessionStatus::Voting);
        assert_eq!(session.current_round(), 2);
        assert_eq!(session.locked_winners(), &[ideas[0]]);
        assert_eq!(session.candidate_ideas().len(), 3);

        session
            .advance_round(
                2,
                &Decision::Finalize {
                    winners: vec![ideas[2], ideas[3]],
                },
            )
            .unwrap();
        assert_eq!(session.status(), SessionStatus::Completed);
        assert_eq!(session.locked_winners(), &[ideas[0], ideas[2], ideas[3]]);
    }

    #[test]
    fn test_advance_round_with_wrong_round_is_stale() {
        let (mut session, ids) = session_with(2);
        session.start(ids[0]).unwrap();
        let idea = session.submit_idea(ids[0], "Only idea").unwrap();
        session.begin_voting(ids[0]).unwrap();

        let decision = Decision::NewRound {
            candidates: vec![idea.id],
        };
        let err = session.advance_round(2, &decision).unwrap_err();
        assert!(err.is_stale());
        assert_eq!(session.current_round(), 1);

        session
            .advance_round(1, &Decision::Finalize { winners: vec![idea.id] })
            .unwrap();
        let err = session
            .advance_round(1, &Decision::Finalize { winners: vec![idea.id] })
            .unwrap_err();
        assert!(err.is_stale());
        assert_eq!(session.locked_winners(), &[idea.id]);
    }
}
