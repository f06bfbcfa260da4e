//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! Session persistence is declared in the domain layer as
//! [`SessionRepository`](idea_domain::SessionRepository).

pub mod notifier;
