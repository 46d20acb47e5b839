//! Post domain model.

use super::user::UserId;
use serde::{Deserialize, Serialize};

/// A post written by a user.
///
/// Only ever held by the post store, and only for the currently selected user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

impl Post {
    /// Test fixture.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn new(id: u32, user_id: UserId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }
}
