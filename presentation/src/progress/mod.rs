//! Progress display driven by session events

pub mod reporter;
