//! Idea selection by rounds of voting
//!
//! This module holds the pure rules that drive a session from its candidate
//! pool to exactly three winners.
//!
//! # Components
//!
//! - [`rule`]: idea quota per participant, selections required per round
//! - [`vote`]: votes and per-round tallies
//! - [`tie_break`]: the resolver that turns a round's tallies into a
//!   [`Decision`]
//! - [`accumulator`]: folds decisions into the running winner list
//!
//! # Round flow
//!
//! ```text
//! ┌──────────────┐   tallies    ┌──────────────┐  Decision  ┌──────────────────┐
//! │ Voting round │ ───────────▶ │  resolve()   │ ─────────▶ │ ResultAccumulator│
//! └──────────────┘              └──────────────┘            └──────────────────┘
//!        ▲                                                           │
//!        │               NewRound / LockPartial (tied group)         │
//!        └───────────────────────────────────────────────────────────┘
//!                              Finalize → session completed
//! ```

pub mod accumulator;
pub mod rule;
pub mod tie_break;
pub mod vote;

// Re-export main types
pub use accumulator::ResultAccumulator;
pub use rule::{MIN_PARTICIPANTS, WINNER_SLOTS, idea_quota, required_votes};
pub use tie_break::{Decision, resolve};
pub use vote::{IdeaTally, Vote, tally};
