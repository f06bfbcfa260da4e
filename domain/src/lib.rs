//! Domain layer for idea-quorum
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A session moves through four phases:
//!
//! ```text
//! Waiting → SubmittingIdeas → Voting(round 1, 2, …) → Completed
//! ```
//!
//! Participants join while waiting, submit a limited number of ideas, then
//! vote in rounds until three winners are settled.
//!
//! ## Quorum
//!
//! - **Quota**: ideas per participant, derived from group size
//! - **Required votes**: selections per ballot, derived from candidate count
//! - **Tie-break**: after each round the tallies are resolved into a
//!   [`Decision`]: finalize, lock some winners and revote the tied group,
//!   or revote the tied group outright

pub mod config;
pub mod core;
pub mod quorum;
pub mod session;

// Re-export commonly used types
pub use config::OutputFormat;
pub use crate::core::{
    error::{DomainError, Entity, ErrorKind},
    ids::{IdeaId, JoinCode, ParticipantId, SessionId},
    text::{DisplayName, IdeaText},
};
pub use session::{
    entities::{Idea, Participant, Session},
    events::SessionEvent,
    repository::{RepositoryError, SessionRepository},
    snapshot::{IdeaView, ParticipantView, SessionSnapshot},
    status::SessionStatus,
};

// Re-export quorum types
pub use quorum::{
    Decision, IdeaTally, ResultAccumulator, Vote, WINNER_SLOTS, idea_quota, required_votes,
    resolve,
};
