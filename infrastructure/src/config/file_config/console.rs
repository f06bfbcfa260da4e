//! Facilitator console settings (`[output]` and `[repl]` sections)
//!
//! ```toml
//! [output]
//! format = "json"   # "text" when unset
//! color = false
//!
//! [repl]
//! show_progress = true
//! history_file = "~/.local/share/idea-quorum/history.txt"
//! ```

use idea_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// How sessions and ballots are rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Rendering of snapshots and demo reports; `None` leaves it to the CLI
    pub format: Option<OutputFormat>,
    /// ANSI colors in text output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Format to render with: the command line flag wins over the file
    pub fn resolve_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.format).unwrap_or_default()
    }
}

/// Facilitator console behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Report joins, ideas and ballots as they happen
    pub show_progress: bool,
    /// Where console commands are remembered between runs
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl FileReplConfig {
    /// Whether session events are echoed; `--quiet` silences them
    pub fn progress_enabled(&self, quiet: bool) -> bool {
        self.show_progress && !quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;

    #[test]
    fn test_flag_overrides_file_format() {
        let config: FileConfig = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.resolve_format(None), OutputFormat::Json);
        assert_eq!(
            config.output.resolve_format(Some(OutputFormat::Text)),
            OutputFormat::Text
        );
        assert_eq!(
            FileOutputConfig::default().resolve_format(None),
            OutputFormat::Text
        );
    }

    #[test]
    fn test_quiet_silences_progress() {
        let repl = FileReplConfig::default();
        assert!(repl.progress_enabled(false));
        assert!(!repl.progress_enabled(true));

        let config: FileConfig = toml::from_str("[repl]\nshow_progress = false\n").unwrap();
        assert!(!config.repl.progress_enabled(false));
        assert!(config.output.color);
    }
}
