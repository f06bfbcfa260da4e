//! CLI command definitions

use clap::Parser;
use idea_domain::OutputFormat;
use std::path::PathBuf;

/// CLI arguments for idea-quorum
#[derive(Parser, Debug)]
#[command(name = "idea-quorum")]
#[command(author, version, about = "Group idea selection by quota and rounds of voting")]
#[command(long_about = r#"
Idea Quorum runs a group decision session that settles on three winning ideas.

A session moves through four phases:
1. Waiting:          participants join with the session's join code
2. Submitting ideas: everyone proposes a limited number of ideas
3. Voting:           rounds of voting until three winners are settled
4. Completed:        the winners are final

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./idea-quorum.toml       Project-level config
3. ~/.config/idea-quorum/config.toml   Global config

Example:
  idea-quorum                   Interactive facilitator console
  idea-quorum --demo 5          Simulated session with five participants
  idea-quorum --demo 4 -o json  Same, printing the final snapshot as JSON
"#)]
pub struct Cli {
    /// Run a simulated session with N concurrent participants and exit
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(2..=64))]
    pub demo: Option<u16>,

    /// Output format: text or json
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Append session events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub event_log: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_demo_with_json_output() {
        let cli = Cli::try_parse_from(["idea-quorum", "--demo", "5", "-o", "json", "-vv"]).unwrap();
        assert_eq!(cli.demo, Some(5));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["idea-quorum"]).unwrap();
        assert!(cli.demo.is_none());
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.no_config);
    }

    #[test]
    fn test_demo_needs_two_participants() {
        assert!(Cli::try_parse_from(["idea-quorum", "--demo", "1"]).is_err());
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        assert!(Cli::try_parse_from(["idea-quorum", "-o", "yaml"]).is_err());
    }
}
