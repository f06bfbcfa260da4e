//! Console output formatter for sessions

use super::formatter::OutputFormatter;
use colored::Colorize;
use idea_application::VoteOutcome;
use idea_domain::{Decision, IdeaView, SessionSnapshot, SessionStatus, core::string::truncate};

/// Longest idea text shown in lists before truncation
const IDEA_DISPLAY_CHARS: usize = 60;

/// Formats sessions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete session view
    pub fn format(snapshot: &SessionSnapshot) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!(
            "Session {} · {}",
            snapshot.join_code,
            Self::status_label(snapshot.status)
        )));
        output.push('\n');

        if snapshot.status == SessionStatus::Voting {
            output.push_str(&format!(
                "{} {}\n",
                "Round:".cyan().bold(),
                snapshot.current_round
            ));
        }
        if let Some(quota) = snapshot.idea_quota {
            output.push_str(&format!("{} {} per participant\n", "Idea quota:".cyan().bold(), quota));
        }

        // Participants
        output.push_str(&Self::section_header(&format!(
            "Participants ({})",
            snapshot.participants.len()
        )));
        for p in &snapshot.participants {
            let mut line = format!("  * {}", p.name);
            if p.is_owner {
                line.push_str(&format!(" {}", "(owner)".dimmed()));
            }
            if snapshot.status != SessionStatus::Waiting {
                line.push_str(&format!("  ideas: {}", p.ideas_submitted));
            }
            if snapshot.status == SessionStatus::Voting {
                let mark = if p.has_voted {
                    "voted".green()
                } else {
                    "waiting".yellow()
                };
                line.push_str(&format!("  {}", mark));
            }
            output.push_str(&line);
            output.push('\n');
        }

        match snapshot.status {
            SessionStatus::Waiting => {
                output.push_str(&format!(
                    "\nShare join code {} to let people in.\n",
                    snapshot.join_code.bold()
                ));
            }
            SessionStatus::SubmittingIdeas => {
                output.push_str(&Self::section_header(&format!(
                    "Ideas ({})",
                    snapshot.ideas.len()
                )));
                output.push_str(&Self::idea_list(&snapshot.ideas));
            }
            SessionStatus::Voting => {
                if !snapshot.locked_winners.is_empty() {
                    output.push_str(&Self::section_header("Locked winners"));
                    output.push_str(&Self::idea_list(&snapshot.locked_winners));
                }
                output.push_str(&Self::section_header(&format!(
                    "Candidates (pick {})",
                    snapshot.required_votes.unwrap_or_default()
                )));
                output.push_str(&Self::idea_list(&snapshot.candidates));
                output.push_str(&format!(
                    "\n{} {}/{}\n",
                    "Ballots:".cyan().bold(),
                    snapshot.voters_in_round.unwrap_or_default(),
                    snapshot.participants.len()
                ));
            }
            SessionStatus::Completed => {
                output.push_str(&Self::section_header("Winners"));
                output.push_str(&Self::idea_list(&snapshot.locked_winners));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format only the winners (concise output)
    pub fn format_winners(snapshot: &SessionSnapshot) -> String {
        let mut output = format!("{}\n", "=== Winning ideas ===".cyan().bold());
        if snapshot.locked_winners.is_empty() {
            output.push_str("  (none yet)\n");
        } else {
            output.push_str(&Self::idea_list(&snapshot.locked_winners));
        }
        output
    }

    /// One-line summary of a ballot
    pub fn format_outcome(outcome: &VoteOutcome, snapshot: &SessionSnapshot) -> String {
        let mut output = format!(
            "{} Ballot counted in round {} ({}/{})",
            "v".green(),
            outcome.round,
            outcome.voters,
            snapshot.participants.len()
        );

        if let Some(decision) = &outcome.decision {
            output.push('\n');
            output.push_str(&Self::format_decision(decision, snapshot));
        }
        output
    }

    /// Describe how a round was resolved
    pub fn format_decision(decision: &Decision, snapshot: &SessionSnapshot) -> String {
        let names = |ids: &[idea_domain::IdeaId]| {
            ids.iter()
                .map(|id| Self::idea_text(snapshot, *id))
                .collect::<Vec<_>>()
                .join(", ")
        };
        match decision {
            Decision::Finalize { winners } => format!(
                "{} Finalized: {}",
                "*".green().bold(),
                names(winners).bold()
            ),
            Decision::NewRound { candidates } => format!(
                "{} Tie. New round between: {}",
                "~".yellow().bold(),
                names(candidates)
            ),
            Decision::LockPartial {
                winners,
                candidates,
            } => format!(
                "{} Locked {}. Revote between: {}",
                "+".cyan().bold(),
                names(winners).bold(),
                names(candidates)
            ),
        }
    }

    fn idea_text(snapshot: &SessionSnapshot, id: idea_domain::IdeaId) -> String {
        snapshot
            .ideas
            .iter()
            .find(|i| i.id == id)
            .map(|i| truncate(&i.text, IDEA_DISPLAY_CHARS))
            .unwrap_or_else(|| id.to_string())
    }

    fn idea_list(ideas: &[IdeaView]) -> String {
        if ideas.is_empty() {
            return format!("  {}\n", "(none)".dimmed());
        }
        ideas
            .iter()
            .enumerate()
            .map(|(i, idea)| {
                format!(
                    "  {:>2}. {} {}\n",
                    i + 1,
                    truncate(&idea.text, IDEA_DISPLAY_CHARS),
                    format!("({})", idea.author_name).dimmed()
                )
            })
            .collect()
    }

    fn status_label(status: SessionStatus) -> &'static str {
        match status {
            SessionStatus::Waiting => "Waiting for participants",
            SessionStatus::SubmittingIdeas => "Submitting ideas",
            SessionStatus::Voting => "Voting",
            SessionStatus::Completed => "Completed",
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_snapshot(&self, snapshot: &SessionSnapshot) -> String {
        Self::format(snapshot)
    }

    fn format_vote(&self, outcome: &VoteOutcome, snapshot: &SessionSnapshot) -> String {
        Self::format_outcome(outcome, snapshot)
    }
}
