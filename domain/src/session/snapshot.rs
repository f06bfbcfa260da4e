//! Read-only session views

use super::entities::Session;
use super::status::SessionStatus;
use crate::core::ids::{IdeaId, ParticipantId, SessionId};
use serde::{Deserialize, Serialize};

/// An idea together with its author's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaView {
    pub id: IdeaId,
    pub text: String,
    pub author: ParticipantId,
    pub author_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantView {
    pub id: ParticipantId,
    pub name: String,
    pub is_owner: bool,
    pub ideas_submitted: usize,
    pub has_voted: bool,
}

/// Point-in-time view of a session for status and result queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub join_code: String,
    pub status: SessionStatus,
    pub current_round: u32,
    pub owner: ParticipantId,
    pub participants: Vec<ParticipantView>,
    pub ideas: Vec<IdeaView>,
    pub candidates: Vec<IdeaView>,
    pub locked_winners: Vec<IdeaView>,
    /// Ideas per participant, once the session has started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea_quota: Option<usize>,
    /// Selections per ballot, while voting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_votes: Option<usize>,
    /// Ballots cast in the current round, while voting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voters_in_round: Option<usize>,
    pub version: u64,
}

impl SessionSnapshot {
    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// Position of `idea` in the candidate list (0-based)
    pub fn candidate_index(&self, idea: IdeaId) -> Option<usize> {
        self.candidates.iter().position(|c| c.id == idea)
    }
}

impl Session {
    fn idea_view(&self, id: IdeaId) -> Option<IdeaView> {
        let idea = self.idea(id)?;
        let author_name = self
            .participant(idea.author)
            .map(|p| p.name.to_string())
            .unwrap_or_default();
        Some(IdeaView {
            id: idea.id,
            text: idea.text.to_string(),
            author: idea.author,
            author_name,
        })
    }

    fn idea_views(&self, ids: &[IdeaId]) -> Vec<IdeaView> {
        ids.iter().filter_map(|id| self.idea_view(*id)).collect()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let voting = self.status == SessionStatus::Voting;
        let all_ideas: Vec<IdeaId> = self.ideas.iter().map(|i| i.id).collect();

        SessionSnapshot {
            id: self.id,
            join_code: self.join_code.to_string(),
            status: self.status,
            current_round: self.current_round,
            owner: self.owner,
            participants: self
                .participants
                .iter()
                .map(|p| ParticipantView {
                    id: p.id,
                    name: p.name.to_string(),
                    is_owner: p.id == self.owner,
                    ideas_submitted: self.ideas_by(p.id),
                    has_voted: voting && self.has_voted(p.id),
                })
                .collect(),
            ideas: self.idea_views(&all_ideas),
            candidates: self.idea_views(self.candidate_ideas()),
            locked_winners: self.idea_views(self.locked_winners()),
            idea_quota: (self.status != SessionStatus::Waiting).then(|| self.idea_quota()),
            required_votes: voting.then(|| self.required_votes()),
            voters_in_round: voting.then(|| self.voters_in_round()),
            version: self.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::ids::JoinCode;
    use crate::session::entities::{Participant, Session};
    use crate::session::status::SessionStatus;

    #[test]
    fn test_snapshot_while_voting() {
        let owner = Participant::named("Owner").unwrap();
        let guest = Participant::named("Guest").unwrap();
        let (owner_id, guest_id) = (owner.id, guest.id);
        let mut session = Session::new(owner, JoinCode::generate(6));
        session.join(guest).unwrap();

        let waiting = session.snapshot();
        assert_eq!(waiting.idea_quota, None);
        assert_eq!(waiting.participants.len(), 2);
        assert!(waiting.participants[0].is_owner);

        session.start(owner_id).unwrap();
        let idea = session.submit_idea(guest_id, "Karaoke night").unwrap();
        session.submit_idea(owner_id, "Escape room").unwrap();
        session.begin_voting(owner_id).unwrap();
        session.cast_ballot(guest_id, &[idea.id]).unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, SessionStatus::Voting);
        assert_eq!(snapshot.current_round, 1);
        assert_eq!(snapshot.idea_quota, Some(4));
        assert_eq!(snapshot.required_votes, Some(1));
        assert_eq!(snapshot.voters_in_round, Some(1));
        assert_eq!(snapshot.candidates.len(), 2);
        assert_eq!(snapshot.candidates[0].author_name, "Guest");
        assert_eq!(snapshot.candidate_index(idea.id), Some(0));
        assert!(snapshot.participants[1].has_voted);
        assert!(!snapshot.participants[0].has_voted);
        assert!(snapshot.locked_winners.is_empty());
    }

    #[test]
    fn test_snapshot_json_omits_inactive_fields() {
        let session = Session::new(Participant::named("Owner").unwrap(), JoinCode::generate(6));
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["status"], "waiting");
        assert!(json.get("required_votes").is_none());
    }
}
