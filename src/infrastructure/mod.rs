//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! Zellij mounts a private, persistent directory for each plugin at `/data`.
//! Everything the plugin writes (preferences, logs) lives there.

pub mod paths;

pub use paths::{get_data_dir, log_path, preferences_path};
