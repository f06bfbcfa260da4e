//! Output formatting for snapshots and ballots

pub mod console;
pub mod formatter;
