//! Storage layer for persisted preferences.
//!
//! This module persists the small settings the dashboard restores at
//! startup: the last search term and the sort key/order. Values are stored
//! as JSON under string keys in a single file inside the plugin data
//! directory.
//!
//! # Modules
//!
//! - `backend`: Backend trait over raw JSON values
//! - `json`: JSON file-based backend with atomic writes
//! - `preferences`: Typed, failure-tolerant facade used by the application
//! - `models`: Preference keys and record types

pub mod backend;
pub mod json;
pub mod models;
pub mod preferences;

pub use backend::PreferenceBackend;
pub use json::JsonPreferences;
pub use models::{SortPreference, SEARCH_KEY, SORT_KEY};
pub use preferences::Preferences;
