//! Application-level configuration.
//!
//! - [`SessionParams`] - knobs applied when sessions are created

pub mod session_params;

pub use session_params::SessionParams;
