//! Sizing rules for a session
//!
//! Two pure functions decide how much each participant may do:
//!
//! - [`idea_quota`]: how many ideas one participant may submit, from the
//!   number of participants in the session
//! - [`required_votes`]: how many distinct ideas each participant must pick
//!   in a voting round, from the number of candidates in that round

/// Number of winners a session settles on
pub const WINNER_SLOTS: usize = 3;

/// Smallest session that may leave the waiting room
pub const MIN_PARTICIPANTS: usize = 2;

/// Maximum ideas per participant for a session of `participants` people
///
/// Smaller groups get more ideas each so the candidate pool stays useful.
/// The result is always 2, 3 or 4 and never grows as `participants` grows.
///
/// # Example
///
/// ```
/// use idea_domain::quorum::idea_quota;
///
/// assert_eq!(idea_quota(2), 4);
/// assert_eq!(idea_quota(4), 3);
/// assert_eq!(idea_quota(12), 2);
/// ```
pub fn idea_quota(participants: usize) -> usize {
    match participants {
        0..=2 => 4,
        3..=4 => 3,
        _ => 2,
    }
}

/// Number of distinct ideas each participant selects in a round with
/// `candidates` candidate ideas
///
/// # Example
///
/// ```
/// use idea_domain::quorum::required_votes;
///
/// assert_eq!(required_votes(7), 3);
/// assert_eq!(required_votes(3), 2);
/// assert_eq!(required_votes(1), 0);
/// ```
pub fn required_votes(candidates: usize) -> usize {
    match candidates {
        0..=1 => 0,
        2 => 1,
        3 => 2,
        _ => 3,
    }
}
