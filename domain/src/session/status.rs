//! Session status

use serde::{Deserialize, Serialize};

/// Phase of a session
///
/// Variants are declared in lifecycle order; the derived `Ord` is used to
/// tell a transition that has not happened yet from one that already has.
/// The voting round number is tracked separately on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Participants are joining
    Waiting,
    /// Participants are submitting ideas
    SubmittingIdeas,
    /// Participants are voting on the candidate set
    Voting,
    /// Winners are settled; the session no longer changes
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Waiting => "waiting",
            SessionStatus::SubmittingIdeas => "submitting_ideas",
            SessionStatus::Voting => "voting",
            SessionStatus::Completed => "completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
