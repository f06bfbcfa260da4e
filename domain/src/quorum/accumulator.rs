//! Winner accumulation across rounds

use super::rule::WINNER_SLOTS;
use super::tie_break::Decision;
use crate::core::ids::IdeaId;
use serde::{Deserialize, Serialize};

/// Running set of locked winners and the current candidate set
///
/// Winners are appended in the order the resolver ranked them. Winners
/// locked in earlier rounds keep their position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultAccumulator {
    locked_winners: Vec<IdeaId>,
    candidates: Vec<IdeaId>,
}

impl ResultAccumulator {
    pub fn new(candidates: Vec<IdeaId>) -> Self {
        Self {
            locked_winners: Vec::new(),
            candidates,
        }
    }

    pub fn locked_winners(&self) -> &[IdeaId] {
        &self.locked_winners
    }

    pub fn candidates(&self) -> &[IdeaId] {
        &self.candidates
    }

    pub fn locked_count(&self) -> usize {
        self.locked_winners.len()
    }

    /// Open winner slots
    pub fn remaining_slots(&self) -> usize {
        WINNER_SLOTS.saturating_sub(self.locked_winners.len())
    }

    /// Fold a round's decision into the running result
    ///
    /// Already locked ideas are never duplicated. On `Finalize` the
    /// candidate set is emptied.
    pub fn apply(&mut self, decision: &Decision) {
        for winner in decision.winners() {
            if self.locked_winners.len() >= WINNER_SLOTS {
                break;
            }
            if !self.locked_winners.contains(winner) {
                self.locked_winners.push(*winner);
            }
        }
        self.candidates = decision
            .next_candidates()
            .map(<[IdeaId]>::to_vec)
            .unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_partial_then_final_keeps_order() {
        let ids: Vec<IdeaId> = (0..5).map(|_| IdeaId::new()).collect();
        let mut acc = ResultAccumulator::new(ids.clone());

        acc.apply(&Decision::LockPartial {
            winners: vec![ids[3]],
            candidates: vec![ids[0], ids[1], ids[4]],
        });
        assert_eq!(acc.locked_winners(), &[ids[3]]);
        assert_eq!(acc.candidates(), &[ids[0], ids[1], ids[4]]);
        assert_eq!(acc.remaining_slots(), 2);

        acc.apply(&Decision::Finalize {
            winners: vec![ids[4], ids[0]],
        });
        assert_eq!(acc.locked_winners(), &[ids[3], ids[4], ids[0]]);
        assert!(acc.candidates().is_empty());
        assert_eq!(acc.remaining_slots(), 0);
    }

    #[test]
    fn test_new_round_only_replaces_candidates() {
        let ids: Vec<IdeaId> = (0..4).map(|_| IdeaId::new()).collect();
        let mut acc = ResultAccumulator::new(ids.clone());

        acc.apply(&Decision::NewRound {
            candidates: vec![ids[1], ids[2]],
        });
        assert_eq!(acc.locked_count(), 0);
        assert_eq!(acc.candidates(), &[ids[1], ids[2]]);
    }

    #[test]
    fn test_apply_never_exceeds_slots_or_duplicates() {
        let ids: Vec<IdeaId> = (0..5).map(|_| IdeaId::new()).collect();
        let mut acc = ResultAccumulator::new(ids.clone());

        acc.apply(&Decision::LockPartial {
            winners: vec![ids[0], ids[1]],
            candidates: vec![ids[2], ids[3]],
        });
        acc.apply(&Decision::Finalize {
            winners: vec![ids[1], ids[2], ids[3]],
        });
        assert_eq!(acc.locked_winners(), &[ids[0], ids[1], ids[2]]);
    }
}
