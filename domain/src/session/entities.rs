//! Session domain entities

use super::status::SessionStatus;
use crate::core::error::{DomainError, Entity};
use crate::core::ids::{IdeaId, JoinCode, ParticipantId, SessionId};
use crate::core::text::{DisplayName, IdeaText};
use crate::quorum::{ResultAccumulator, Vote};
use serde::{Deserialize, Serialize};

/// A member of a session (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: DisplayName,
}

impl Participant {
    pub fn new(id: ParticipantId, name: DisplayName) -> Self {
        Self { id, name }
    }

    /// Create a participant with a fresh id from a raw display name
    pub fn named(name: &str) -> Result<Self, DomainError> {
        Ok(Self::new(ParticipantId::new(), DisplayName::parse(name)?))
    }
}

/// A submitted idea (Entity, immutable once created)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: IdeaId,
    pub text: IdeaText,
    pub author: ParticipantId,
    pub session: SessionId,
    /// Position in submission order within the session
    pub seq: usize,
}

/// A group decision session (Aggregate root)
///
/// All state of one session lives here. The aggregate is only ever mutated
/// through its methods, each of which either applies completely or returns
/// an error without touching the session. Stores wrap every mutation in a
/// single atomic read-modify-write and bump [`version`](Self::version) on
/// commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub(crate) id: SessionId,
    pub(crate) join_code: JoinCode,
    pub(crate) owner: ParticipantId,
    pub(crate) status: SessionStatus,
    pub(crate) current_round: u32,
    pub(crate) participants: Vec<Participant>,
    pub(crate) max_participants: Option<usize>,
    pub(crate) ideas: Vec<Idea>,
    pub(crate) results: ResultAccumulator,
    /// Votes of the round in progress
    pub(crate) votes: Vec<Vote>,
    /// Participants who cast their ballot in the round in progress
    pub(crate) round_voters: Vec<ParticipantId>,
    pub(crate) version: u64,
}

impl Session {
    /// Open a new session in `Waiting` with the owner as first participant
    pub fn new(owner: Participant, join_code: JoinCode) -> Self {
        Self {
            id: SessionId::new(),
            join_code,
            owner: owner.id,
            status: SessionStatus::Waiting,
            current_round: 0,
            participants: vec![owner],
            max_participants: None,
            ideas: Vec::new(),
            results: ResultAccumulator::default(),
            votes: Vec::new(),
            round_voters: Vec::new(),
            version: 0,
        }
    }

    /// Cap the number of participants (owner included)
    pub fn with_max_participants(mut self, max: Option<usize>) -> Self {
        self.max_participants = max;
        self
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn join_code(&self) -> &JoinCode {
        &self.join_code
    }

    pub fn owner(&self) -> ParticipantId {
        self.owner
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn max_participants(&self) -> Option<usize> {
        self.max_participants
    }

    pub fn is_member(&self, id: ParticipantId) -> bool {
        self.participants.iter().any(|p| p.id == id)
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// All ideas in submission order
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn idea(&self, id: IdeaId) -> Option<&Idea> {
        self.ideas.iter().find(|i| i.id == id)
    }

    /// Ideas eligible in the current round, in submission order
    pub fn candidate_ideas(&self) -> &[IdeaId] {
        self.results.candidates()
    }

    /// Winners locked so far, in lock order
    pub fn locked_winners(&self) -> &[IdeaId] {
        self.results.locked_winners()
    }

    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Record a committed mutation
    pub fn bump_version(&mut self) {
        self.version += 1;
    }

    pub(crate) fn require_member(&self, id: ParticipantId) -> Result<(), DomainError> {
        if self.is_member(id) {
            Ok(())
        } else {
            Err(DomainError::not_found(Entity::Participant, id))
        }
    }

    /// Add a participant while the session is waiting
    ///
    /// Returns `false` when the participant was already a member, in which
    /// case nothing changes.
    pub fn join(&mut self, participant: Participant) -> Result<bool, DomainError> {
        if self.status != SessionStatus::Waiting {
            return Err(DomainError::InvalidPhase {
                action: "join",
                status: self.status,
            });
        }
        if self.is_member(participant.id) {
            return Ok(false);
        }
        if let Some(max) = self.max_participants
            && self.participants.len() >= max
        {
            return Err(DomainError::SessionFull { max });
        }
        self.participants.push(participant);
        Ok(true)
    }
}
