//! Preference keys and record types.

use crate::domain::{SortKey, SortOrder};
use serde::{Deserialize, Serialize};

/// Key under which the last search term is stored, as a JSON string.
pub const SEARCH_KEY: &str = "userSearch";

/// Key under which the sort settings are stored, as a [`SortPreference`].
pub const SORT_KEY: &str = "userSort";

/// Persisted sort settings.
///
/// Serialized as `{"key": "name", "order": "asc"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortPreference {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortPreference {
    #[must_use]
    pub const fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }
}
