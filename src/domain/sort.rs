//! Sort key and order for the user directory.
//!
//! Both enums serialize to the short lowercase strings used in the stored sort
//! preference (`{"key": "name", "order": "asc"}`).

use serde::{Deserialize, Serialize};

/// Field the directory is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Email,
}

impl SortKey {
    /// The other key. Used by the `s` keybinding.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Name,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
        }
    }
}

/// Direction of the directory sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// The opposite direction. Used by the `o` keybinding.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_preference_strings() {
        assert_eq!(serde_json::to_string(&SortKey::Email).unwrap(), r#""email""#);
        assert_eq!(serde_json::to_string(&SortOrder::Descending).unwrap(), r#""desc""#);
        assert_eq!(serde_json::from_str::<SortOrder>(r#""asc""#).unwrap(), SortOrder::Ascending);
    }

    #[test]
    fn toggles_are_involutions() {
        assert_eq!(SortKey::Name.toggled().toggled(), SortKey::Name);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    }
}
