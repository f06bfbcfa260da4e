//! Tie-break resolution
//!
//! After every voting round the tallies are handed to [`resolve`], which
//! decides whether the winners are settled or another round is needed.
//!
//! ```text
//! tallies ──▶ group by vote count (descending, stable) ──▶ walk groups
//!
//!   group size == remaining slots  → Finalize(absorbed + group)
//!   group size <  remaining slots  → absorb group, continue
//!   group size >  remaining slots  → NewRound(group)               if nothing absorbed
//!                                  → LockPartial(absorbed, group)  otherwise
//!   groups exhausted               → Finalize(absorbed)
//! ```
//!
//! Ties inside a group keep the order of the input tallies, which callers
//! supply in idea creation order. The resolver never hashes identifiers, so
//! identical input always yields an identical [`Decision`].

use super::rule::WINNER_SLOTS;
use super::vote::IdeaTally;
use crate::core::ids::IdeaId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Outcome of resolving one voting round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Decision {
    /// The listed ideas fill every remaining slot; the session completes.
    Finalize { winners: Vec<IdeaId> },
    /// Nothing could be locked; the tied group votes again.
    NewRound { candidates: Vec<IdeaId> },
    /// Some ideas are safely ahead and get locked; the tied group votes
    /// again for the slots that are left.
    LockPartial {
        winners: Vec<IdeaId>,
        candidates: Vec<IdeaId>,
    },
}

impl Decision {
    /// Ideas this decision locks in, in ranking order
    pub fn winners(&self) -> &[IdeaId] {
        match self {
            Decision::Finalize { winners } | Decision::LockPartial { winners, .. } => winners,
            Decision::NewRound { .. } => &[],
        }
    }

    /// Candidate set of the next round, if there is one
    pub fn next_candidates(&self) -> Option<&[IdeaId]> {
        match self {
            Decision::Finalize { .. } => None,
            Decision::NewRound { candidates } | Decision::LockPartial { candidates, .. } => {
                Some(candidates)
            }
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Decision::Finalize { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Finalize { .. } => "finalize",
            Decision::NewRound { .. } => "new_round",
            Decision::LockPartial { .. } => "lock_partial",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Finalize { winners } => write!(f, "finalize ({} winners)", winners.len()),
            Decision::NewRound { candidates } => {
                write!(f, "new round ({} candidates)", candidates.len())
            }
            Decision::LockPartial {
                winners,
                candidates,
            } => write!(
                f,
                "lock {} and revote ({} candidates)",
                winners.len(),
                candidates.len()
            ),
        }
    }
}

/// Decide what follows a round given its tallies and the number of winners
/// locked in earlier rounds
///
/// # Example
///
/// ```
/// use idea_domain::quorum::{Decision, IdeaTally, resolve};
/// use idea_domain::IdeaId;
///
/// let ideas: Vec<IdeaId> = (0..4).map(|_| IdeaId::new()).collect();
/// let tallies: Vec<IdeaTally> = ideas
///     .iter()
///     .zip([9, 4, 4, 1])
///     .map(|(id, votes)| IdeaTally::new(*id, votes))
///     .collect();
///
/// assert_eq!(
///     resolve(&tallies, 0),
///     Decision::Finalize { winners: ideas[..3].to_vec() }
/// );
/// ```
pub fn resolve(tallies: &[IdeaTally], already_locked: usize) -> Decision {
    let mut remaining = WINNER_SLOTS.saturating_sub(already_locked);
    if remaining == 0 {
        return Decision::Finalize { winners: vec![] };
    }

    let mut absorbed: Vec<IdeaId> = Vec::new();

    for group in group_by_votes(tallies) {
        match group.len().cmp(&remaining) {
            Ordering::Equal => {
                absorbed.extend(group);
                return Decision::Finalize { winners: absorbed };
            }
            Ordering::Less => {
                remaining -= group.len();
                absorbed.extend(group);
            }
            Ordering::Greater => {
                return if absorbed.is_empty() {
                    Decision::NewRound { candidates: group }
                } else {
                    Decision::LockPartial {
                        winners: absorbed,
                        candidates: group,
                    }
                };
            }
        }
    }

    // Fewer candidates than open slots: settle for what there is.
    Decision::Finalize { winners: absorbed }
}

/// Group ideas by vote count, highest count first, keeping input order
/// within each group
fn group_by_votes(tallies: &[IdeaTally]) -> Vec<Vec<IdeaId>> {
    let mut ranked: Vec<&IdeaTally> = tallies.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.votes.cmp(&a.votes));

    let mut groups: Vec<(usize, Vec<IdeaId>)> = Vec::new();
    for entry in ranked {
        match groups.last_mut() {
            Some((votes, ids)) if *votes == entry.votes => ids.push(entry.idea),
            _ => groups.push((entry.votes, vec![entry.idea])),
        }
    }
    groups.into_iter().map(|(_, ids)| ids).collect()
}
