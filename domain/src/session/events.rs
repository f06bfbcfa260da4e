//! Session events
//!
//! Emitted after every committed change so a notification sink can tell
//! participants about new phases and rounds.

use crate::core::ids::{IdeaId, JoinCode, ParticipantId, SessionId};
use crate::quorum::Decision;
use serde::{Deserialize, Serialize};

/// Something that happened to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    SessionCreated {
        session: SessionId,
        owner: ParticipantId,
        join_code: JoinCode,
    },
    ParticipantJoined {
        session: SessionId,
        participant: ParticipantId,
        name: String,
        participants: usize,
    },
    SessionStarted {
        session: SessionId,
        participants: usize,
        idea_quota: usize,
    },
    IdeaSubmitted {
        session: SessionId,
        idea: IdeaId,
        author: ParticipantId,
        ideas_left: usize,
    },
    VotingStarted {
        session: SessionId,
        round: u32,
        candidates: Vec<IdeaId>,
        required_votes: usize,
    },
    VoteAccepted {
        session: SessionId,
        round: u32,
        voter: ParticipantId,
        voters: usize,
        participants: usize,
    },
    RoundAdvanced {
        session: SessionId,
        resolved_round: u32,
        decision: Decision,
        locked_winners: usize,
    },
    SessionCompleted {
        session: SessionId,
        winners: Vec<IdeaId>,
    },
}

impl SessionEvent {
    /// Event type identifier, matching the serialized `type` tag
    pub fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::SessionCreated { .. } => "session_created",
            SessionEvent::ParticipantJoined { .. } => "participant_joined",
            SessionEvent::SessionStarted { .. } => "session_started",
            SessionEvent::IdeaSubmitted { .. } => "idea_submitted",
            SessionEvent::VotingStarted { .. } => "voting_started",
            SessionEvent::VoteAccepted { .. } => "vote_accepted",
            SessionEvent::RoundAdvanced { .. } => "round_advanced",
            SessionEvent::SessionCompleted { .. } => "session_completed",
        }
    }

    pub fn session(&self) -> SessionId {
        match self {
            SessionEvent::SessionCreated { session, .. }
            | SessionEvent::ParticipantJoined { session, .. }
            | SessionEvent::SessionStarted { session, .. }
            | SessionEvent::IdeaSubmitted { session, .. }
            | SessionEvent::VotingStarted { session, .. }
            | SessionEvent::VoteAccepted { session, .. }
            | SessionEvent::RoundAdvanced { session, .. }
            | SessionEvent::SessionCompleted { session, .. } => *session,
        }
    }
}
