//! Idea submission

use super::{RunSessionError, RunSessionUseCase};
use idea_domain::{Idea, ParticipantId, SessionEvent, SessionId, SessionRepository};
use tracing::{debug, info};

impl<R: SessionRepository + 'static> RunSessionUseCase<R> {
    /// Submit an idea on behalf of `author`
    ///
    /// The quota check and the insert run inside one repository update, so
    /// concurrent submissions from the same author never exceed the quota.
    pub async fn submit_idea(
        &self,
        session_id: SessionId,
        author: ParticipantId,
        content: &str,
    ) -> Result<Idea, RunSessionError> {
        let content = content.to_string();
        let (idea, ideas_left) = self
            .repository
            .update(session_id, move |session| {
                let idea = session.submit_idea(author, &content)?;
                Ok((idea, session.ideas_left(author)))
            })
            .await?;

        info!(
            "Idea {} submitted to session {} ({} left for author)",
            idea.seq + 1,
            session_id,
            ideas_left
        );
        debug!("Idea {}: {}", idea.id, idea.text);

        self.notifier.notify(&SessionEvent::IdeaSubmitted {
            session: session_id,
            idea: idea.id,
            author,
            ideas_left,
        });
        Ok(idea)
    }
}
