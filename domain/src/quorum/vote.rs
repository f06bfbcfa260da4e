//! Vote types for idea selection
//!
//! A participant's ballot in a round is stored as one [`Vote`] per selected
//! idea. Counting them against the round's candidate list yields
//! [`IdeaTally`] entries in candidate (creation) order.

use crate::core::ids::{IdeaId, ParticipantId};
use serde::{Deserialize, Serialize};

/// One selection by one participant in one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vote {
    pub voter: ParticipantId,
    pub idea: IdeaId,
    pub round: u32,
}

impl Vote {
    pub fn new(voter: ParticipantId, idea: IdeaId, round: u32) -> Self {
        Self { voter, idea, round }
    }
}

/// Vote count for one candidate idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaTally {
    pub idea: IdeaId,
    pub votes: usize,
}

impl IdeaTally {
    pub fn new(idea: IdeaId, votes: usize) -> Self {
        Self { idea, votes }
    }
}

/// Count the votes cast in `round` for each candidate
///
/// The result follows the order of `candidates`, which callers keep in idea
/// creation order. Candidates nobody picked appear with zero votes; votes
/// for non-candidates or other rounds are ignored.
///
/// # Example
///
/// ```
/// use idea_domain::quorum::{Vote, tally};
/// use idea_domain::{IdeaId, ParticipantId};
///
/// let (a, b) = (IdeaId::new(), IdeaId::new());
/// let voter = ParticipantId::new();
/// let votes = vec![Vote::new(voter, b, 1)];
///
/// let tallies = tally(&[a, b], &votes, 1);
/// assert_eq!(tallies[0].votes, 0);
/// assert_eq!(tallies[1].votes, 1);
/// ```
pub fn tally(candidates: &[IdeaId], votes: &[Vote], round: u32) -> Vec<IdeaTally> {
    candidates
        .iter()
        .map(|idea| {
            let count = votes
                .iter()
                .filter(|v| v.round == round && v.idea == *idea)
                .count();
            IdeaTally::new(*idea, count)
        })
        .collect()
}
