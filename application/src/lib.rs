//! Application layer for idea-quorum
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::notifier::{CompositeNotifier, NoNotifier, SessionNotifier};
pub use use_cases::run_session::{RunSessionError, RunSessionUseCase, VoteOutcome};
