//! Decision session domain.
//!
//! - [`entities::Session`] - the session aggregate (participants, ideas, votes, results)
//! - [`status::SessionStatus`] - lifecycle phase
//! - [`state_machine`] - start / begin voting / advance round transitions
//! - [`submission`] - idea submission under quota
//! - [`ballot`] - ballots and round completion
//! - [`events::SessionEvent`] - change notifications
//! - [`snapshot::SessionSnapshot`] - read-only view
//! - [`repository::SessionRepository`] - trait for session persistence

pub mod ballot;
pub mod entities;
pub mod events;
pub mod repository;
pub mod snapshot;
pub mod state_machine;
pub mod status;
pub mod submission;
