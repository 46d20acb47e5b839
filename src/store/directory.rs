//! User directory store.
//!
//! Holds the fetched user collection together with the search and sort
//! parameters, and keeps the derived view (`visible`) in sync with them. Every
//! mutation that touches one of the four inputs recomputes the view before
//! returning, so readers never observe a stale projection.
//!
//! # Example
//!
//! ```
//! use userdeck::domain::User;
//! use userdeck::store::DirectoryStore;
//!
//! let users: Vec<User> = serde_json::from_str(r#"[
//!     {"id": 1, "name": "Bob", "username": "bob", "email": "b@x.com",
//!      "address": {"street": "", "suite": "", "city": "", "zipcode": "",
//!                  "geo": {"lat": "0", "lng": "0"}},
//!      "phone": "", "website": "",
//!      "company": {"name": "", "catchPhrase": "", "bs": ""}},
//!     {"id": 2, "name": "Alice", "username": "alice", "email": "a@x.com",
//!      "address": {"street": "", "suite": "", "city": "", "zipcode": "",
//!                  "geo": {"lat": "0", "lng": "0"}},
//!      "phone": "", "website": "",
//!      "company": {"name": "", "catchPhrase": "", "bs": ""}}
//! ]"#)?;
//!
//! let mut store = DirectoryStore::new();
//! store.load_users();
//! store.receive_users(Ok(users));
//!
//! let names: Vec<&str> = store.visible().iter().map(|u| u.name.as_str()).collect();
//! assert_eq!(names, ["Alice", "Bob"]);
//!
//! store.set_search_term("bob");
//! assert_eq!(store.visible().len(), 1);
//! # Ok::<(), serde_json::Error>(())
//! ```

use super::request::RequestStatus;
use crate::api::FetchRequest;
use crate::domain::error::Result;
use crate::domain::{SortKey, SortOrder, User};
use chrono::{DateTime, Utc};
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

/// State container for the user directory.
#[derive(Debug, Clone, Default)]
pub struct DirectoryStore {
    users: Vec<User>,
    visible: Vec<User>,
    search_term: String,
    sort_key: SortKey,
    sort_order: SortOrder,
    status: RequestStatus,
    loaded_at: Option<DateTime<Utc>>,
}

impl DirectoryStore {
    /// Creates an empty store: no users, empty search, name ascending, idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full collection from the last successful load, in API order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Derived view: the users matching the search term, sorted.
    #[must_use]
    pub fn visible(&self) -> &[User] {
        &self.visible
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    #[must_use]
    pub const fn status(&self) -> &RequestStatus {
        &self.status
    }

    /// When the current collection was received, if ever.
    #[must_use]
    pub const fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Starts a load of the full directory.
    ///
    /// Marks the store as loading and returns the request the runtime must
    /// issue. Calling this again before the first response arrives is allowed;
    /// whichever response lands last wins.
    pub fn load_users(&mut self) -> FetchRequest {
        tracing::debug!(previous_status = ?self.status, "loading users");
        self.status = RequestStatus::Loading;
        FetchRequest::Users
    }

    /// Applies the outcome of a users request.
    ///
    /// On failure the previously loaded users stay in place and only the
    /// status changes.
    pub fn receive_users(&mut self, outcome: Result<Vec<User>>) {
        match outcome {
            Ok(users) => {
                tracing::debug!(user_count = users.len(), "users received");
                self.users = users;
                self.loaded_at = Some(Utc::now());
                self.status = RequestStatus::Idle;
                self.recompute();
            }
            Err(e) => {
                tracing::warn!(error = %e, "users request failed");
                self.status = RequestStatus::Error(e.to_string());
            }
        }
    }

    /// Stores the search term verbatim and recomputes the view.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.recompute();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.recompute();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
        self.recompute();
    }

    /// Dismisses a displayed error. Other states are left alone.
    pub fn clear_error(&mut self) {
        if self.status.error().is_some() {
            self.status = RequestStatus::Idle;
        }
    }

    fn recompute(&mut self) {
        let _span = tracing::debug_span!("recompute_directory_view",
            total_users = self.users.len(),
            term_len = self.search_term.len(),
            sort_key = ?self.sort_key,
            sort_order = ?self.sort_order
        ).entered();

        self.visible = filter_and_sort(&self.users, &self.search_term, self.sort_key, self.sort_order);

        tracing::debug!(visible_count = self.visible.len(), "directory view recomputed");
    }
}

/// Whether a user matches a search term.
///
/// Case-insensitive substring match on name or email. The empty term matches
/// everyone.
#[must_use]
pub fn matches_term(user: &User, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    user.name.to_lowercase().contains(&needle) || user.email.to_lowercase().contains(&needle)
}

/// Computes the derived view for a set of parameters.
///
/// Lowercased sort values are compared with the root-locale collator, so
/// accented letters sort next to their base letter. Filtering keeps API
/// order; the sort is stable, so users with equal keys keep that order in
/// both directions.
#[must_use]
pub fn filter_and_sort(users: &[User], term: &str, key: SortKey, order: SortOrder) -> Vec<User> {
    let mut keyed: Vec<(String, &User)> = users
        .iter()
        .filter(|user| matches_term(user, term))
        .map(|user| (sort_value(user, key), user))
        .collect();

    let collator = root_collator();
    keyed.sort_by(|(a, _), (b, _)| compare(collator.as_ref(), a, b, order));

    keyed.into_iter().map(|(_, user)| user.clone()).collect()
}

fn sort_value(user: &User, key: SortKey) -> String {
    match key {
        SortKey::Name => user.name.to_lowercase(),
        SortKey::Email => user.email.to_lowercase(),
    }
}

/// Collator for the root locale at default (tertiary) strength.
fn root_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = ?e, "collator unavailable, sorting by code point");
            None
        }
    }
}

fn compare(collator: Option<&Collator>, a: &str, b: &str, order: SortOrder) -> Ordering {
    let ordering = collator.map_or_else(|| a.cmp(b), |collator| collator.compare(a, b));
    match order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserdeckError;

    fn bob_and_alice() -> Vec<User> {
        vec![User::new(1, "Bob", "b@x.com"), User::new(2, "Alice", "a@x.com")]
    }

    fn loaded(users: Vec<User>) -> DirectoryStore {
        let mut store = DirectoryStore::new();
        store.load_users();
        store.receive_users(Ok(users));
        store
    }

    fn names(store: &DirectoryStore) -> Vec<&str> {
        store.visible().iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn sorts_by_name_ascending_by_default() {
        let store = loaded(bob_and_alice());
        assert_eq!(names(&store), ["Alice", "Bob"]);
        assert_eq!(store.status(), &RequestStatus::Idle);
        assert!(store.loaded_at().is_some());
    }

    #[test]
    fn search_matches_name_or_email() {
        let mut store = loaded(bob_and_alice());

        store.set_search_term("bob");
        assert_eq!(names(&store), ["Bob"]);

        store.set_search_term("x.com");
        assert_eq!(names(&store), ["Alice", "Bob"]);

        store.set_search_term("BOB");
        assert_eq!(names(&store), ["Bob"]);

        store.set_search_term("nobody");
        assert!(store.visible().is_empty());
    }

    #[test]
    fn search_term_is_kept_verbatim() {
        let mut store = loaded(bob_and_alice());
        store.set_search_term(" bob");
        assert_eq!(store.search_term(), " bob");
        assert!(store.visible().is_empty());
    }

    #[test]
    fn descending_reverses_distinct_keys() {
        let mut store = loaded(vec![
            User::new(1, "carol", "c@x.com"),
            User::new(2, "Alice", "z@x.com"),
            User::new(3, "bob", "m@x.com"),
        ]);
        let ascending = names(&store).into_iter().map(String::from).collect::<Vec<_>>();

        store.set_sort_order(SortOrder::Descending);
        let mut descending = names(&store).into_iter().map(String::from).collect::<Vec<_>>();
        descending.reverse();

        assert_eq!(ascending, descending);
    }

    #[test]
    fn sort_key_email_uses_lowercased_email() {
        let mut store = loaded(vec![
            User::new(1, "A", "Zed@x.com"),
            User::new(2, "B", "amy@x.com"),
            User::new(3, "C", "Mia@x.com"),
        ]);
        store.set_sort_key(SortKey::Email);
        assert_eq!(names(&store), ["B", "C", "A"]);
    }

    #[test]
    fn equal_keys_keep_api_order_in_both_directions() {
        let mut store = loaded(vec![
            User::new(1, "Sam", "first@x.com"),
            User::new(2, "Ann", "ann@x.com"),
            User::new(3, "sam", "second@x.com"),
        ]);
        let ids = |s: &DirectoryStore| s.visible().iter().map(|u| u.id).collect::<Vec<_>>();
        assert_eq!(ids(&store), [2, 1, 3]);

        store.set_sort_order(SortOrder::Descending);
        assert_eq!(ids(&store), [1, 3, 2]);
    }

    #[test]
    fn accented_names_sort_next_to_their_base_letter() {
        let users = vec![
            User::new(1, "Zoe", "z@x.com"),
            User::new(2, "Émile", "e@x.com"),
            User::new(3, "Adam", "a@x.com"),
        ];
        let sorted = filter_and_sort(&users, "", SortKey::Name, SortOrder::Ascending);
        let names: Vec<&str> = sorted.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Adam", "Émile", "Zoe"]);

        let sorted = filter_and_sort(&users, "", SortKey::Name, SortOrder::Descending);
        let names: Vec<&str> = sorted.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Zoe", "Émile", "Adam"]);
    }

    #[test]
    fn email_punctuation_follows_collation_order() {
        let users = vec![
            User::new(1, "At", "ann@x.com"),
            User::new(2, "Underscore", "ann_x.com"),
        ];
        let sorted = filter_and_sort(&users, "", SortKey::Email, SortOrder::Ascending);
        let ids: Vec<u32> = sorted.iter().map(|u| u.id).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let users = vec![
            User::new(1, "delta", "d@x.com"),
            User::new(2, "Alpha", "a@x.com"),
            User::new(3, "charlie", "c@x.com"),
            User::new(4, "Bravo", "b@x.com"),
        ];
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            for key in [SortKey::Name, SortKey::Email] {
                let once = filter_and_sort(&users, "a", key, order);
                let twice = filter_and_sort(&once, "a", key, order);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn parameters_set_before_load_apply_to_the_result() {
        let mut store = DirectoryStore::new();
        store.set_search_term("a@");
        store.set_sort_order(SortOrder::Descending);
        assert!(store.visible().is_empty());

        store.receive_users(Ok(bob_and_alice()));
        assert_eq!(names(&store), ["Alice"]);
    }

    #[test]
    fn load_sets_loading_and_clears_error() {
        let mut store = DirectoryStore::new();
        store.receive_users(Err(UserdeckError::Http { resource: "users", status: 500 }));
        assert_eq!(store.status().error(), Some("Failed to fetch users (HTTP 500)"));

        assert_eq!(store.load_users(), FetchRequest::Users);
        assert!(store.status().is_loading());
    }

    #[test]
    fn failure_keeps_previous_users() {
        let mut store = loaded(bob_and_alice());
        store.load_users();
        store.receive_users(Err(UserdeckError::Http { resource: "users", status: 502 }));

        assert_eq!(store.users().len(), 2);
        assert_eq!(names(&store), ["Alice", "Bob"]);
        assert!(store.status().error().is_some());
    }

    #[test]
    fn clear_error_only_touches_errors() {
        let mut store = DirectoryStore::new();
        store.load_users();
        store.clear_error();
        assert!(store.status().is_loading());

        store.receive_users(Err(UserdeckError::Http { resource: "users", status: 500 }));
        store.clear_error();
        assert_eq!(store.status(), &RequestStatus::Idle);
    }
}
