//! Presentation layer for idea-quorum
//!
//! This crate contains CLI definitions, output formatters, progress
//! reporters, the facilitator console and the simulated demo session.

pub mod cli;
pub mod config;
pub mod demo;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use demo::{DemoReport, DemoRunner};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{JsonFormatter, OutputFormatter, formatter_for};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use repl::FacilitatorRepl;
