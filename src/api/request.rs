//! Outbound request descriptors and their routing context.
//!
//! Zellij performs web requests on the host and echoes a string context map
//! back with the result. [`FetchRequest`] is serialized into that map so the
//! response can be routed to the store that asked for it.

use crate::domain::UserId;
use std::collections::BTreeMap;

/// Context key naming the requested collection.
const REQUEST_KEY: &str = "request";

/// Context key carrying the user id of a posts request.
const USER_ID_KEY: &str = "user_id";

/// A GET request the plugin runtime should issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRequest {
    /// The full user directory.
    Users,
    /// Posts written by one user, filtered server-side.
    Posts {
        user_id: UserId,
    },
}

impl FetchRequest {
    /// Collection name used in error messages and the request context.
    #[must_use]
    pub const fn resource(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Posts { .. } => "posts",
        }
    }

    /// Path and query relative to the API base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use userdeck::api::FetchRequest;
    ///
    /// assert_eq!(FetchRequest::Users.path(), "/users");
    /// assert_eq!(FetchRequest::Posts { user_id: 3 }.path(), "/posts?userId=3");
    /// ```
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Users => "/users".to_string(),
            Self::Posts { user_id } => format!("/posts?userId={user_id}"),
        }
    }

    /// Encodes the request into the context map echoed back with the response.
    #[must_use]
    pub fn to_context(self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(REQUEST_KEY.to_string(), self.resource().to_string());
        if let Self::Posts { user_id } = self {
            context.insert(USER_ID_KEY.to_string(), user_id.to_string());
        }
        context
    }

    /// Recovers the request from a response context.
    ///
    /// Returns `None` for contexts this plugin did not produce.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        match context.get(REQUEST_KEY).map(String::as_str) {
            Some("users") => Some(Self::Users),
            Some("posts") => context
                .get(USER_ID_KEY)
                .and_then(|id| id.parse().ok())
                .map(|user_id| Self::Posts { user_id }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_context_carries_user_id() {
        let context = FetchRequest::Posts { user_id: 7 }.to_context();
        assert_eq!(context.get("request").map(String::as_str), Some("posts"));
        assert_eq!(context.get("user_id").map(String::as_str), Some("7"));
        assert_eq!(FetchRequest::from_context(&context), Some(FetchRequest::Posts { user_id: 7 }));
    }

    #[test]
    fn users_context_has_no_user_id() {
        let context = FetchRequest::Users.to_context();
        assert_eq!(context.len(), 1);
        assert_eq!(FetchRequest::from_context(&context), Some(FetchRequest::Users));
    }

    #[test]
    fn foreign_or_broken_contexts_are_ignored() {
        assert_eq!(FetchRequest::from_context(&BTreeMap::new()), None);

        let mut context = BTreeMap::new();
        context.insert("request".to_string(), "posts".to_string());
        context.insert("user_id".to_string(), "five".to_string());
        assert_eq!(FetchRequest::from_context(&context), None);

        context.insert("request".to_string(), "comments".to_string());
        assert_eq!(FetchRequest::from_context(&context), None);
    }
}
