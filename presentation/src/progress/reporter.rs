//! Progress reporting for running sessions

use colored::Colorize;
use idea_application::SessionNotifier;
use idea_domain::{Decision, SessionEvent};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Shows one progress bar per voting round, filled as ballots arrive
pub struct ProgressReporter {
    multi: MultiProgress,
    /// Bar of the round currently collecting ballots
    round_bar: Mutex<Option<(u32, ProgressBar)>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            round_bar: Mutex::new(None),
        }
    }

    fn round_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-")
    }

    fn new_round_bar(&self, round: u32, participants: usize) -> ProgressBar {
        let pb = self.multi.add(ProgressBar::new(participants as u64));
        pb.set_style(Self::round_style());
        pb.set_prefix(format!("Round {}", round));
        pb.set_message("waiting for ballots");
        pb
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionNotifier for ProgressReporter {
    fn notify(&self, event: &SessionEvent) {
        match event {
            SessionEvent::VoteAccepted {
                round,
                voters,
                participants,
                ..
            } => {
                let Ok(mut bar) = self.round_bar.lock() else {
                    return;
                };
                // Ballots of the next round can arrive before the previous
                // round's resolution is reported
                if bar.as_ref().is_some_and(|(open, _)| open != round)
                    && let Some((_, stale)) = bar.take()
                {
                    stale.finish();
                }
                let (_, pb) =
                    bar.get_or_insert_with(|| (*round, self.new_round_bar(*round, *participants)));
                // Concurrent ballots may report out of order
                pb.set_position(pb.position().max(*voters as u64));
                pb.set_message(format!("{} ballots in", pb.position()));
            }
            SessionEvent::RoundAdvanced {
                resolved_round,
                decision,
                ..
            } => {
                if let Ok(mut bar) = self.round_bar.lock()
                    && bar.as_ref().is_some_and(|(open, _)| open == resolved_round)
                    && let Some((_, pb)) = bar.take()
                {
                    pb.finish_with_message(format!(
                        "Round {} {}",
                        resolved_round,
                        decision_label(decision).green()
                    ));
                }
            }
            _ => {}
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SessionNotifier for SimpleProgress {
    fn notify(&self, event: &SessionEvent) {
        match event {
            SessionEvent::SessionCreated { join_code, .. } => {
                println!("{} Session open, join code {}", "->".cyan(), join_code.as_str().bold());
            }
            SessionEvent::ParticipantJoined {
                name, participants, ..
            } => {
                println!("  {} {} joined ({} in session)", "+".green(), name, participants);
            }
            SessionEvent::SessionStarted {
                participants,
                idea_quota,
                ..
            } => {
                println!(
                    "{} {} ({} participants, {} ideas each)",
                    "->".cyan(),
                    "Idea submission open".bold(),
                    participants,
                    idea_quota
                );
            }
            SessionEvent::IdeaSubmitted { ideas_left, .. } => {
                println!("  {} Idea received ({} left for its author)", "v".green(), ideas_left);
            }
            SessionEvent::VotingStarted {
                round,
                candidates,
                required_votes,
                ..
            } => {
                println!(
                    "{} {} {} ({} candidates, pick {})",
                    "->".cyan(),
                    "Voting round".bold(),
                    round,
                    candidates.len(),
                    required_votes
                );
            }
            SessionEvent::VoteAccepted {
                voters,
                participants,
                ..
            } => {
                println!("  {} Ballot {}/{}", "v".green(), voters, participants);
            }
            SessionEvent::RoundAdvanced {
                resolved_round,
                decision,
                locked_winners,
                ..
            } => {
                println!(
                    "{} Round {} {} ({} winners locked)",
                    "->".cyan(),
                    resolved_round,
                    decision_label(decision),
                    locked_winners
                );
            }
            SessionEvent::SessionCompleted { winners, .. } => {
                println!(
                    "{} {} with {} winners",
                    "*".green().bold(),
                    "Session completed".bold(),
                    winners.len()
                );
            }
        }
    }
}

fn decision_label(decision: &Decision) -> &'static str {
    match decision {
        Decision::Finalize { .. } => "finalized",
        Decision::NewRound { .. } => "tied, revoting",
        Decision::LockPartial { .. } => "partly locked, revoting",
    }
}
