//! Session storage adapters
//!
//! Implementations of the domain [`SessionRepository`](idea_domain::SessionRepository).

mod in_memory;

pub use in_memory::InMemorySessionStore;
