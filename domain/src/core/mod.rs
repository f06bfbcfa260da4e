//! Core domain concepts shared across all subdomains.
//!
//! - [`ids`] - session, participant and idea identifiers, join codes
//! - [`text::IdeaText`] - a validated idea body
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod ids;
pub mod string;
pub mod text;
