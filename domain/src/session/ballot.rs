//! Ballots and round completion

use super::entities::Session;
use super::status::SessionStatus;
use crate::core::error::DomainError;
use crate::core::ids::{IdeaId, ParticipantId};
use crate::quorum::{Decision, IdeaTally, Vote, required_votes, resolve, tally};

impl Session {
    /// Distinct ideas each participant must select in the current round
    pub fn required_votes(&self) -> usize {
        required_votes(self.results.candidates().len())
    }

    pub fn has_voted(&self, voter: ParticipantId) -> bool {
        self.round_voters.contains(&voter)
    }

    /// Number of participants who have voted in the current round
    pub fn voters_in_round(&self) -> usize {
        self.round_voters.len()
    }

    /// Every participant has voted in the current round
    pub fn is_round_complete(&self) -> bool {
        self.status == SessionStatus::Voting && self.round_voters.len() >= self.participants.len()
    }

    /// Vote counts of the current round, in candidate order
    pub fn round_tallies(&self) -> Vec<IdeaTally> {
        tally(self.results.candidates(), &self.votes, self.current_round)
    }

    /// Record `voter`'s selection for the current round
    ///
    /// Checks run in this order: phase, membership, duplicate ballot,
    /// number of distinct ideas, candidate eligibility. Returns the round
    /// the ballot was counted in.
    pub fn cast_ballot(
        &mut self,
        voter: ParticipantId,
        selection: &[IdeaId],
    ) -> Result<u32, DomainError> {
        if self.status != SessionStatus::Voting {
            return Err(DomainError::InvalidPhase {
                action: "vote",
                status: self.status,
            });
        }
        self.require_member(voter)?;
        if self.has_voted(voter) {
            return Err(DomainError::AlreadyVoted {
                round: self.current_round,
            });
        }

        let mut distinct: Vec<IdeaId> = Vec::with_capacity(selection.len());
        for idea in selection {
            if !distinct.contains(idea) {
                distinct.push(*idea);
            }
        }
        let expected = self.required_votes();
        if distinct.len() != expected {
            return Err(DomainError::WrongSelectionCount {
                expected,
                actual: distinct.len(),
            });
        }
        if selection.len() != expected {
            // Right number of distinct ideas, but some listed twice
            return Err(DomainError::WrongSelectionCount {
                expected,
                actual: selection.len(),
            });
        }
        if let Some(outsider) = distinct
            .iter()
            .find(|idea| !self.results.candidates().contains(idea))
        {
            return Err(DomainError::IneligibleIdea(outsider.to_string()));
        }

        let round = self.current_round;
        self.votes
            .extend(distinct.into_iter().map(|idea| Vote::new(voter, idea, round)));
        self.round_voters.push(voter);
        Ok(round)
    }

    /// Resolve `round` if every participant has voted in it
    ///
    /// Returns `Ok(None)` while ballots are outstanding and the applied
    /// decision once the round is resolved. A round that was already
    /// resolved reports [`DomainError::StaleTransition`], so of several
    /// callers racing on the same round exactly one sees `Some`.
    pub fn complete_round(&mut self, round: u32) -> Result<Option<Decision>, DomainError> {
        if self.status != SessionStatus::Voting || self.current_round != round {
            return Err(DomainError::StaleTransition {
                target: "next_round",
                status: self.status,
            });
        }
        if !self.is_round_complete() {
            return Ok(None);
        }

        let decision = resolve(&self.round_tallies(), self.results.locked_count());
        self.advance_round(round, &decision)?;
        Ok(Some(decision))
    }
}
