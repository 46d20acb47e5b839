//! Preference backend abstraction.
//!
//! This module defines the [`PreferenceBackend`] trait that abstracts over the
//! place preferences are persisted. The trait works on raw
//! [`serde_json::Value`]s and reports every failure; typing and error
//! tolerance live one layer up in [`Preferences`](super::Preferences).

use crate::domain::error::Result;
use serde_json::Value;

/// Abstraction over persistent key-value storage.
///
/// # Implementations
///
/// - [`JsonPreferences`](super::JsonPreferences): JSON file with atomic writes
pub trait PreferenceBackend {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read or parsed.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Deletes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn remove(&mut self, key: &str) -> Result<()>;
}
