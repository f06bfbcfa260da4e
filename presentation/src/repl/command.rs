//! Facilitator console commands

use thiserror::Error;

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Open a new session owned by `name`
    Create(String),
    Join(String),
    Start,
    Idea { name: String, text: String },
    Begin,
    /// Cast `name`'s ballot; picks are 1-based candidate positions
    Vote { name: String, picks: Vec<usize> },
    Status,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (type /help for available commands)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a candidate number")]
    BadPick(String),
}

impl ReplCommand {
    /// Parse one console line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "/create" => Ok(ReplCommand::Create(Self::name(rest, "/create <name>")?)),
            "/join" => Ok(ReplCommand::Join(Self::name(rest, "/join <name>")?)),
            "/start" => Ok(ReplCommand::Start),
            "/idea" => {
                let usage = "/idea <name> <text>";
                let (name, text) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::Usage(usage))?;
                let text = text.trim();
                if text.is_empty() {
                    return Err(CommandError::Usage(usage));
                }
                Ok(ReplCommand::Idea {
                    name: name.to_string(),
                    text: text.to_string(),
                })
            }
            "/begin" => Ok(ReplCommand::Begin),
            "/vote" => {
                let usage = "/vote <name> <n>[,<n>...]";
                let (name, picks) = match rest.split_once(char::is_whitespace) {
                    Some((name, picks)) => (name, picks),
                    None => (rest, ""),
                };
                if name.is_empty() {
                    return Err(CommandError::Usage(usage));
                }
                Ok(ReplCommand::Vote {
                    name: name.to_string(),
                    picks: Self::picks(picks)?,
                })
            }
            "/status" | "/s" => Ok(ReplCommand::Status),
            "/help" | "/h" | "/?" => Ok(ReplCommand::Help),
            "/quit" | "/exit" | "/q" => Ok(ReplCommand::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }

    fn name(rest: &str, usage: &'static str) -> Result<String, CommandError> {
        if rest.is_empty() {
            Err(CommandError::Usage(usage))
        } else {
            Ok(rest.to_string())
        }
    }

    /// `1,3` or `1 3` or `1, 3`
    fn picks(raw: &str) -> Result<Vec<usize>, CommandError> {
        raw.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| match part.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(CommandError::BadPick(part.to_string())),
            })
            .collect()
    }
}

pub const HELP: &str = "\
Commands:
  /create <name>             Open a session owned by <name>
  /join <name>               Add <name> to the waiting session
  /start                     Open idea submission (owner)
  /idea <name> <text>        Submit an idea for <name>
  /begin                     Close submission and start voting (owner)
  /vote <name> <n>[,<n>...]  Cast <name>'s ballot by candidate number
  /status, /s                Show the session
  /help, /h, /?              Show this help
  /quit, /exit, /q           Exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(ReplCommand::parse("/start"), Ok(ReplCommand::Start));
        assert_eq!(ReplCommand::parse("  /begin  "), Ok(ReplCommand::Begin));
        assert_eq!(ReplCommand::parse("/q"), Ok(ReplCommand::Quit));
        assert_eq!(
            ReplCommand::parse("/create Alice"),
            Ok(ReplCommand::Create("Alice".to_string()))
        );
    }

    #[test]
    fn test_parse_idea_keeps_full_text() {
        assert_eq!(
            ReplCommand::parse("/idea Bob  Board game night  "),
            Ok(ReplCommand::Idea {
                name: "Bob".to_string(),
                text: "Board game night".to_string()
            })
        );
        assert_eq!(
            ReplCommand::parse("/idea Bob"),
            Err(CommandError::Usage("/idea <name> <text>"))
        );
    }

    #[test]
    fn test_parse_vote_picks() {
        assert_eq!(
            ReplCommand::parse("/vote Carol 1,3, 4"),
            Ok(ReplCommand::Vote {
                name: "Carol".to_string(),
                picks: vec![1, 3, 4]
            })
        );
        // Empty ballot when nothing is to be picked
        assert_eq!(
            ReplCommand::parse("/vote Carol"),
            Ok(ReplCommand::Vote {
                name: "Carol".to_string(),
                picks: vec![]
            })
        );
        assert_eq!(
            ReplCommand::parse("/vote Carol 0"),
            Err(CommandError::BadPick("0".to_string()))
        );
        assert_eq!(
            ReplCommand::parse("/vote Carol two"),
            Err(CommandError::BadPick("two".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_and_missing_args() {
        assert!(matches!(
            ReplCommand::parse("/dance"),
            Err(CommandError::Unknown(_))
        ));
        assert!(matches!(
            ReplCommand::parse("/join"),
            Err(CommandError::Usage(_))
        ));
    }
}
