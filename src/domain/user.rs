//! User domain model.
//!
//! Mirrors the user records served by the directory API. Field names follow the
//! API's camelCase JSON so records deserialize without a mapping layer.

use serde::{Deserialize, Serialize};

/// Identifier of a user, unique within the directory.
pub type UserId = u32;

/// A person listed in the directory.
///
/// Users are immutable once fetched; the directory store replaces the whole
/// collection on every successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// Postal address of a user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Coordinates as served by the API (decimal strings).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Employer of a user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

impl User {
    /// Test fixture with only the fields the dashboard searches and sorts on.
    ///
    /// Remaining fields are left empty.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            username: name.to_lowercase().replace(' ', "."),
            name,
            email: email.into(),
            address: Address::default(),
            phone: String::new(),
            website: String::new(),
            company: Company::default(),
        }
    }
}
