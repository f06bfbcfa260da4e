//! Configuration file loading for idea-quorum
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `IDEA_QUORUM_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./idea-quorum.toml` or `./.idea-quorum.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/idea-quorum/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileReplConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
