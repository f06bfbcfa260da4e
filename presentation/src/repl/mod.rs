//! Facilitator console
//!
//! A readline-based console that drives one session on behalf of everyone
//! in the room: the facilitator types each participant's actions.

mod command;

pub use command::{CommandError, HELP, ReplCommand};

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::{OutputFormatter, formatter_for};
use colored::Colorize;
use idea_application::{RunSessionError, RunSessionUseCase};
use idea_domain::{
    IdeaId, IdeaView, OutputFormat, Participant, ParticipantId, SessionId, SessionRepository,
};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;
use tracing::debug;

/// Errors shown to the facilitator; none of them end the console
#[derive(Error, Debug)]
pub enum ReplError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("{}", describe(.0))]
    Session(#[from] RunSessionError),

    #[error("no session yet, use /create <name> first")]
    NoSession,

    #[error("nobody called '{0}' is in this session")]
    UnknownMember(String),

    #[error("'{0}' is already in this session")]
    NameTaken(String),

    #[error("candidate {pick} does not exist (there are {candidates})")]
    PickOutOfRange { pick: usize, candidates: usize },
}

fn describe(error: &RunSessionError) -> String {
    match error.kind() {
        Some(kind) => format!("[{}] {}", kind, error),
        None => error.to_string(),
    }
}

/// What the console should do after a line
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Quit,
}

/// The session currently driven by the console
struct ActiveSession {
    id: SessionId,
    owner: ParticipantId,
    /// Members in join order, by display name
    members: Vec<(String, ParticipantId)>,
}

impl ActiveSession {
    fn member(&self, name: &str) -> Result<ParticipantId, ReplError> {
        self.members
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, id)| *id)
            .ok_or_else(|| ReplError::UnknownMember(name.to_string()))
    }
}

/// Interactive facilitator console
pub struct FacilitatorRepl<R: SessionRepository + 'static> {
    use_case: RunSessionUseCase<R>,
    formatter: Box<dyn OutputFormatter>,
    format: OutputFormat,
    config: ReplConfig,
    active: Option<ActiveSession>,
}

impl<R: SessionRepository + 'static> FacilitatorRepl<R> {
    pub fn new(use_case: RunSessionUseCase<R>) -> Self {
        Self {
            use_case,
            formatter: Box::new(ConsoleFormatter),
            format: OutputFormat::Text,
            config: ReplConfig::default(),
            active: None,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.formatter = formatter_for(format);
        self.format = format;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive console
    pub async fn run(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("idea> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    match self.handle_line(line).await {
                        Step::Continue(output) => {
                            if !output.is_empty() {
                                println!("{}", output);
                            }
                        }
                        Step::Quit => {
                            println!("Bye!");
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Idea Quorum - Facilitator Console     │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", HELP);
        println!();
    }

    /// Parse and run one console line
    pub async fn handle_line(&mut self, line: &str) -> Step {
        let command = match ReplCommand::parse(line) {
            Ok(command) => command,
            Err(e) => return Step::Continue(Self::error_line(&e.into())),
        };
        if command == ReplCommand::Quit {
            return Step::Quit;
        }

        match self.execute(command).await {
            Ok(output) => Step::Continue(output),
            Err(e) => {
                debug!("Console command failed: {}", e);
                Step::Continue(Self::error_line(&e))
            }
        }
    }

    fn error_line(error: &ReplError) -> String {
        format!("{} {}", "x".red(), error)
    }

    /// Run one command against the session
    pub async fn execute(&mut self, command: ReplCommand) -> Result<String, ReplError> {
        match command {
            ReplCommand::Create(name) => {
                let owner = Participant::named(&name).map_err(RunSessionError::from)?;
                let owner_id = owner.id;
                let display = owner.name.to_string();
                let snapshot = self.use_case.create_session(owner).await?;
                self.active = Some(ActiveSession {
                    id: snapshot.id,
                    owner: owner_id,
                    members: vec![(display.clone(), owner_id)],
                });
                Ok(format!(
                    "Session created by {}. Join code: {}",
                    display,
                    snapshot.join_code.bold()
                ))
            }
            ReplCommand::Join(name) => {
                let active = self.active()?;
                let participant = Participant::named(&name).map_err(RunSessionError::from)?;
                let display = participant.name.to_string();
                if active.member(&display).is_ok() {
                    return Err(ReplError::NameTaken(display));
                }
                let (id, participant_id) = (active.id, participant.id);
                let snapshot = self.use_case.join_session(id, participant).await?;
                if let Some(active) = self.active.as_mut() {
                    active.members.push((display.clone(), participant_id));
                }
                Ok(format!(
                    "{} joined ({} participants)",
                    display,
                    snapshot.participants.len()
                ))
            }
            ReplCommand::Start => {
                let active = self.active()?;
                let snapshot = self.use_case.start_session(active.id, active.owner).await?;
                Ok(format!(
                    "Idea submission open: up to {} ideas each",
                    snapshot.idea_quota.unwrap_or_default()
                ))
            }
            ReplCommand::Idea { name, text } => {
                let active = self.active()?;
                let author = active.member(&name)?;
                let idea = self.use_case.submit_idea(active.id, author, &text).await?;
                Ok(format!("Idea #{} from {}: {}", idea.seq + 1, name, idea.text))
            }
            ReplCommand::Begin => {
                let active = self.active()?;
                let snapshot = self.use_case.begin_voting(active.id, active.owner).await?;
                Ok(self.formatter.format_snapshot(&snapshot))
            }
            ReplCommand::Vote { name, picks } => {
                let active = self.active()?;
                let (id, voter) = (active.id, active.member(&name)?);
                let before = self.use_case.get_session_snapshot(id).await?;
                let selection = Self::resolve_picks(&picks, &before.candidates)?;

                let outcome = self.use_case.submit_vote(id, voter, selection).await?;
                let after = self.use_case.get_session_snapshot(id).await?;
                let mut output = self.formatter.format_vote(&outcome, &after);
                if outcome.round_advanced && self.format == OutputFormat::Text {
                    output.push('\n');
                    output.push_str(&self.formatter.format_snapshot(&after));
                }
                Ok(output)
            }
            ReplCommand::Status => {
                let active = self.active()?;
                let snapshot = self.use_case.get_session_snapshot(active.id).await?;
                Ok(self.formatter.format_snapshot(&snapshot))
            }
            ReplCommand::Help => Ok(HELP.to_string()),
            ReplCommand::Quit => Ok(String::new()),
        }
    }

    fn active(&self) -> Result<&ActiveSession, ReplError> {
        self.active.as_ref().ok_or(ReplError::NoSession)
    }

    /// Map 1-based candidate numbers to idea ids
    fn resolve_picks(
        picks: &[usize],
        candidates: &[IdeaView],
    ) -> Result<Vec<IdeaId>, ReplError> {
        picks
            .iter()
            .map(|pick| {
                pick.checked_sub(1)
                    .and_then(|index| candidates.get(index))
                    .map(|c| c.id)
                    .ok_or(ReplError::PickOutOfRange {
                        pick: *pick,
                        candidates: candidates.len(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idea_domain::SessionStatus;
    use idea_infrastructure::InMemorySessionStore;
    use std::sync::Arc;

    fn repl() -> FacilitatorRepl<InMemorySessionStore> {
        FacilitatorRepl::new(RunSessionUseCase::new(Arc::new(InMemorySessionStore::new())))
    }

    async fn run(repl: &mut FacilitatorRepl<InMemorySessionStore>, line: &str) -> String {
        match repl.handle_line(line).await {
            Step::Continue(output) => output,
            Step::Quit => panic!("unexpected quit on {}", line),
        }
    }

    async fn status(repl: &FacilitatorRepl<InMemorySessionStore>) -> SessionStatus {
        let id = repl.active.as_ref().unwrap().id;
        repl.use_case.get_session_snapshot(id).await.unwrap().status
    }

    #[tokio::test]
    async fn test_commands_need_a_session() {
        let mut repl = repl();
        let err = repl.execute(ReplCommand::Start).await.unwrap_err();
        assert!(matches!(err, ReplError::NoSession));
        assert_eq!(repl.handle_line("/quit").await, Step::Quit);
    }

    #[tokio::test]
    async fn test_full_session_through_console() {
        let mut repl = repl();
        let out = run(&mut repl, "/create Alice").await;
        assert!(out.contains("Join code"));
        run(&mut repl, "/join Bob").await;
        run(&mut repl, "/start").await;
        assert_eq!(status(&repl).await, SessionStatus::SubmittingIdeas);

        run(&mut repl, "/idea Alice Karaoke night").await;
        run(&mut repl, "/idea Bob Escape room").await;
        let out = run(&mut repl, "/begin").await;
        assert!(out.contains("Karaoke night"));
        assert_eq!(status(&repl).await, SessionStatus::Voting);

        // Both candidates fit in the three winner slots, so the tie finalizes
        run(&mut repl, "/vote Alice 1").await;
        let out = run(&mut repl, "/vote Bob 2").await;
        assert!(out.contains("Finalized"));
        assert_eq!(status(&repl).await, SessionStatus::Completed);
    }

    #[tokio::test]
    async fn test_console_reports_rule_violations() {
        let mut repl = repl();
        run(&mut repl, "/create Alice").await;

        let err = repl.execute(ReplCommand::Start).await.unwrap_err();
        assert!(err.to_string().contains("not_enough_participants"));

        run(&mut repl, "/join Bob").await;
        let err = repl
            .execute(ReplCommand::Join("Bob".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ReplError::NameTaken(_)));

        let err = repl
            .execute(ReplCommand::Idea {
                name: "Carol".to_string(),
                text: "Picnic".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ReplError::UnknownMember(_)));
    }

    #[tokio::test]
    async fn test_vote_pick_out_of_range() {
        let mut repl = repl();
        for line in [
            "/create Alice",
            "/join Bob",
            "/start",
            "/idea Alice Karaoke night",
            "/begin",
        ] {
            run(&mut repl, line).await;
        }
        let err = repl
            .execute(ReplCommand::Vote {
                name: "Bob".to_string(),
                picks: vec![4],
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ReplError::PickOutOfRange {
                pick: 4,
                candidates: 1
            }
        ));
    }

    #[tokio::test]
    async fn test_json_output_for_status() {
        let mut repl = repl().with_output_format(OutputFormat::Json);
        run(&mut repl, "/create Alice").await;
        let out = run(&mut repl, "/status").await;
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["status"], "waiting");
    }
}
