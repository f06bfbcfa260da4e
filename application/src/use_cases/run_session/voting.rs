//! Ballots and round completion

use super::{RunSessionError, RunSessionUseCase, VoteOutcome};
use idea_domain::{
    Decision, IdeaId, ParticipantId, SessionEvent, SessionId, SessionRepository, SessionStatus,
};
use tracing::{debug, info};

/// What a round-completing ballot committed, captured inside the update
struct Advance {
    decision: Decision,
    status: SessionStatus,
    next_round: u32,
    candidates: Vec<IdeaId>,
    required_votes: usize,
    locked_winners: Vec<IdeaId>,
}

/// Everything one ballot committed
struct Ballot {
    round: u32,
    voters: usize,
    participants: usize,
    advance: Option<Advance>,
}

impl<R: SessionRepository + 'static> RunSessionUseCase<R> {
    /// Cast `voter`'s ballot for the current round
    ///
    /// Recording the ballot and resolving the round run in one repository
    /// update. The ballot that brings the round to full participation is
    /// the one that resolves it; a rejected or failed call leaves no ballot
    /// behind.
    pub async fn submit_vote(
        &self,
        session_id: SessionId,
        voter: ParticipantId,
        selection: Vec<IdeaId>,
    ) -> Result<VoteOutcome, RunSessionError> {
        let ballot = self
            .repository
            .update(session_id, move |session| {
                let round = session.cast_ballot(voter, &selection)?;
                let voters = session.voters_in_round();
                let participants = session.participant_count();
                let advance = session.complete_round(round)?.map(|decision| Advance {
                    decision,
                    status: session.status(),
                    next_round: session.current_round(),
                    candidates: session.candidate_ideas().to_vec(),
                    required_votes: session.required_votes(),
                    locked_winners: session.locked_winners().to_vec(),
                });
                Ok(Ballot {
                    round,
                    voters,
                    participants,
                    advance,
                })
            })
            .await?;

        let Ballot {
            round,
            voters,
            participants,
            advance,
        } = ballot;
        info!(
            "Ballot accepted in session {} round {} ({}/{})",
            session_id, round, voters, participants
        );
        self.notifier.notify(&SessionEvent::VoteAccepted {
            session: session_id,
            round,
            voter,
            voters,
            participants,
        });

        match advance {
            Some(advance) => {
                self.announce_advance(session_id, round, &advance);
                Ok(VoteOutcome::advanced(round, voters, advance.decision))
            }
            None => {
                debug!(
                    "Round {} of session {} waiting for {} more ballots",
                    round,
                    session_id,
                    participants.saturating_sub(voters)
                );
                Ok(VoteOutcome::recorded(round, voters))
            }
        }
    }

    fn announce_advance(&self, session_id: SessionId, round: u32, advance: &Advance) {
        info!(
            "Session {} round {} resolved: {} ({} winners locked)",
            session_id,
            round,
            advance.decision,
            advance.locked_winners.len()
        );
        self.notifier.notify(&SessionEvent::RoundAdvanced {
            session: session_id,
            resolved_round: round,
            decision: advance.decision.clone(),
            locked_winners: advance.locked_winners.len(),
        });

        if advance.status == SessionStatus::Completed {
            info!("Session {} completed", session_id);
            self.notifier.notify(&SessionEvent::SessionCompleted {
                session: session_id,
                winners: advance.locked_winners.clone(),
            });
        } else {
            self.notifier.notify(&SessionEvent::VotingStarted {
                session: session_id,
                round: advance.next_round,
                candidates: advance.candidates.clone(),
                required_votes: advance.required_votes,
            });
        }
    }
}
