//! Idea submission under the per-participant quota

use super::entities::{Idea, Session};
use super::status::SessionStatus;
use crate::core::error::DomainError;
use crate::core::ids::{IdeaId, ParticipantId};
use crate::core::text::IdeaText;
use crate::quorum::idea_quota;

impl Session {
    /// Maximum ideas each participant may submit in this session
    pub fn idea_quota(&self) -> usize {
        idea_quota(self.participants.len())
    }

    /// Number of ideas `author` has submitted so far
    pub fn ideas_by(&self, author: ParticipantId) -> usize {
        self.ideas.iter().filter(|i| i.author == author).count()
    }

    /// Ideas `author` may still submit
    pub fn ideas_left(&self, author: ParticipantId) -> usize {
        self.idea_quota().saturating_sub(self.ideas_by(author))
    }

    /// Check the quota and record a new idea
    ///
    /// The check and the insert happen on the same `&mut self`, so a store
    /// that serializes mutations per session cannot let two submissions
    /// both pass the check.
    pub fn submit_idea(
        &mut self,
        author: ParticipantId,
        content: &str,
    ) -> Result<Idea, DomainError> {
        if self.status != SessionStatus::SubmittingIdeas {
            return Err(DomainError::InvalidPhase {
                action: "submit ideas",
                status: self.status,
            });
        }
        self.require_member(author)?;
        let text = IdeaText::parse(content)?;

        let quota = self.idea_quota();
        if self.ideas_by(author) >= quota {
            return Err(DomainError::QuotaExceeded { quota });
        }

        let idea = Idea {
            id: IdeaId::new(),
            text,
            author,
            session: self.id,
            seq: self.ideas.len(),
        };
        self.ideas.push(idea.clone());
        Ok(idea)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::JoinCode;
    use crate::session::entities::Participant;

    fn started(n: usize) -> (Session, Vec<ParticipantId>) {
        let owner = Participant::named("Owner").unwrap();
        let mut ids = vec![owner.id];
        let mut session = Session::new(owner, JoinCode::generate(6));
        for i in 1..n {
            let p = Participant::named(&format!("P{}", i)).unwrap();
            ids.push(p.id);
            session.join(p).unwrap();
        }
        session.start(ids[0]).unwrap();
        (session, ids)
    }

    #[test]
    fn test_submit_before_start_is_invalid_phase() {
        let owner = Participant::named("Owner").unwrap();
        let id = owner.id;
        let mut session = Session::new(owner, JoinCode::generate(6));

        let err = session.submit_idea(id, "Too early").unwrap_err();
        assert!(matches!(err, DomainError::InvalidPhase { .. }));
    }

    #[test]
    fn test_submit_stores_trimmed_text_in_order() {
        let (mut session, ids) = started(2);
        let first = session.submit_idea(ids[0], "  Board games  ").unwrap();
        let second = session.submit_idea(ids[1], "Hiking").unwrap();

        assert_eq!(first.text.as_str(), "Board games");
        assert_eq!(first.seq, 0);
        assert_eq!(second.seq, 1);
        assert_eq!(session.ideas().len(), 2);
        assert_eq!(first.session, session.id());
    }

    #[test]
    fn test_submit_rejects_bad_content() {
        let (mut session, ids) = started(2);
        let err = session.submit_idea(ids[0], "  x ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidContent(_)));
        assert!(session.ideas().is_empty());
    }

    #[test]
    fn test_submit_from_stranger_is_not_found() {
        let (mut session, _) = started(2);
        let err = session
            .submit_idea(ParticipantId::new(), "Who am I")
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn test_quota_enforced_per_author() {
        // Five participants: two ideas each
        let (mut session, ids) = started(5);
        assert_eq!(session.idea_quota(), 2);

        session.submit_idea(ids[1], "Idea one").unwrap();
        session.submit_idea(ids[1], "Idea two").unwrap();
        let err = session.submit_idea(ids[1], "Idea three").unwrap_err();
        assert_eq!(err, DomainError::QuotaExceeded { quota: 2 });
        assert_eq!(session.ideas_left(ids[1]), 0);

        // Other authors are unaffected
        session.submit_idea(ids[2], "Idea four").unwrap();
        assert_eq!(session.ideas_left(ids[2]), 1);
    }

    #[test]
    fn test_two_person_session_allows_four_ideas() {
        let (mut session, ids) = started(2);
        for n in 0..4 {
            session.submit_idea(ids[0], &format!("Idea {}", n)).unwrap();
        }
        assert!(session.submit_idea(ids[0], "Idea 5").is_err());
    }
}
