//! Typed preference access that never fails.
//!
//! Losing a saved search term is harmless, so none of the operations here
//! return errors: every failure is logged with `tracing::warn!` and the
//! caller carries on as if nothing was stored.

use crate::storage::backend::PreferenceBackend;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Failure-tolerant preference store over any [`PreferenceBackend`].
///
/// # Examples
///
/// ```no_run
/// use userdeck::storage::{JsonPreferences, Preferences, SEARCH_KEY};
///
/// let mut prefs = Preferences::new(JsonPreferences::new("/data/preferences.json"));
/// prefs.save(SEARCH_KEY, &"leanne");
/// let term: Option<String> = prefs.load(SEARCH_KEY);
/// ```
#[derive(Debug, Clone)]
pub struct Preferences<B> {
    backend: B,
}

impl<B: PreferenceBackend> Preferences<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Stores `value` under `key`.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize preference");
                return;
            }
        };

        if let Err(e) = self.backend.set(key, value) {
            tracing::warn!(key, error = %e, "failed to save preference");
        }
    }

    /// Returns the value stored under `key`.
    ///
    /// `None` when the key is absent, the storage cannot be read, or the
    /// stored value does not deserialize as `T`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = match self.backend.get(key) {
            Ok(value) => value?,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read preference");
                return None;
            }
        };

        match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring malformed preference");
                None
            }
        }
    }

    /// Deletes `key` if present.
    pub fn remove(&mut self, key: &str) {
        if let Err(e) = self.backend.remove(key) {
            tracing::warn!(key, error = %e, "failed to remove preference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{Result, UserdeckError};
    use crate::domain::{SortKey, SortOrder};
    use crate::storage::models::{SortPreference, SEARCH_KEY, SORT_KEY};
    use serde_json::Value;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryBackend {
        values: HashMap<String, Value>,
        broken: bool,
    }

    impl PreferenceBackend for MemoryBackend {
        fn get(&self, key: &str) -> Result<Option<Value>> {
            if self.broken {
                return Err(UserdeckError::Storage("unavailable".into()));
            }
            Ok(self.values.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: Value) -> Result<()> {
            if self.broken {
                return Err(UserdeckError::Storage("unavailable".into()));
            }
            self.values.insert(key.to_string(), value);
            Ok(())
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            if self.broken {
                return Err(UserdeckError::Storage("unavailable".into()));
            }
            self.values.remove(key);
            Ok(())
        }
    }

    #[test]
    fn round_trips_typed_values() {
        let mut prefs = Preferences::new(MemoryBackend::default());
        let sort = SortPreference::new(SortKey::Email, SortOrder::Descending);

        prefs.save(SORT_KEY, &sort);
        prefs.save(SEARCH_KEY, "ervin");

        assert_eq!(prefs.load::<SortPreference>(SORT_KEY), Some(sort));
        assert_eq!(prefs.load::<String>(SEARCH_KEY).as_deref(), Some("ervin"));
    }

    #[test]
    fn wrong_shape_loads_as_none() {
        let mut prefs = Preferences::new(MemoryBackend::default());
        prefs.save(SORT_KEY, "not an object");
        assert_eq!(prefs.load::<SortPreference>(SORT_KEY), None);
    }

    #[test]
    fn backend_failures_are_swallowed() {
        let mut prefs = Preferences::new(MemoryBackend { broken: true, ..Default::default() });
        prefs.save(SEARCH_KEY, "x");
        prefs.remove(SEARCH_KEY);
        assert_eq!(prefs.load::<String>(SEARCH_KEY), None);
    }

    #[test]
    fn remove_forgets_value() {
        let mut prefs = Preferences::new(MemoryBackend::default());
        prefs.save(SEARCH_KEY, "x");
        prefs.remove(SEARCH_KEY);
        assert_eq!(prefs.load::<String>(SEARCH_KEY), None);
    }
}
