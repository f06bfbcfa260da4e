//! Infrastructure layer for idea-quorum
//!
//! This crate contains adapters that implement the ports defined in the
//! domain and application layers, including configuration file loading.

pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileReplConfig, FileSessionConfig,
};
pub use logging::JsonlSessionEventLog;
pub use store::InMemorySessionStore;
