//! JSON file-based preference backend.
//!
//! All preferences live in one JSON object, keyed by preference name. The
//! file is re-read on every access so that two plugin instances sharing the
//! data directory see each other's writes, and every write goes through a
//! temporary file followed by a rename so a crash never leaves a truncated
//! file behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "userSearch": "leanne",
//!   "userSort": { "key": "email", "order": "desc" }
//! }
//! ```

use crate::domain::error::{Result, UserdeckError};
use crate::storage::backend::PreferenceBackend;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

type Entries = Map<String, Value>;

/// Preference backend storing a JSON object in a single file.
#[derive(Debug, Clone)]
pub struct JsonPreferences {
    file_path: PathBuf,
}

impl JsonPreferences {
    /// Creates a backend for `file_path`.
    ///
    /// The file is not touched until the first read or write; a missing file
    /// reads as empty.
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Reads the whole file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or does not
    /// hold a JSON object.
    fn read_entries(&self) -> Result<Entries> {
        let contents = match std::fs::read_to_string(&self.file_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::trace!(path = ?self.file_path, "preferences file absent");
                return Ok(Entries::new());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&contents)
            .map_err(|e| UserdeckError::Storage(format!("failed to parse preferences: {e}")))
    }

    /// Reads the file for modification. A malformed file is replaced.
    fn entries_for_write(&self) -> Result<Entries> {
        match self.read_entries() {
            Err(UserdeckError::Storage(reason)) => {
                tracing::warn!(path = ?self.file_path, %reason, "overwriting malformed preferences file");
                Ok(Entries::new())
            }
            other => other,
        }
    }

    /// Writes the whole file atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the temporary file cannot
    /// be written or renamed.
    fn write_entries(&self, entries: &Entries) -> Result<()> {
        tracing::debug!(path = ?self.file_path, entries = entries.len(), "saving preferences");

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| UserdeckError::Storage(format!("failed to serialize preferences: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;
        Ok(())
    }
}

impl PreferenceBackend for JsonPreferences {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let _span = tracing::debug_span!("json_preferences_get", key).entered();

        let value = self.read_entries()?.remove(key);
        tracing::debug!(found = value.is_some(), "preference lookup complete");
        Ok(value)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let _span = tracing::debug_span!("json_preferences_set", key).entered();

        let mut entries = self.entries_for_write()?;
        if entries.get(key) == Some(&value) {
            tracing::trace!("value unchanged, skipping write");
            return Ok(());
        }
        entries.insert(key.to_string(), value);
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_preferences_remove", key).entered();

        let mut entries = self.entries_for_write()?;
        if entries.remove(key).is_none() {
            tracing::trace!("key absent, nothing to remove");
            return Ok(());
        }
        self.write_entries(&entries)
    }
}
