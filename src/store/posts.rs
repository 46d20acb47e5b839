//! Post collection store.
//!
//! Holds the posts of exactly one selected user. The store remembers which
//! user its outstanding request was issued for, so a response that arrives
//! after the overlay was closed, or after another user was requested, is
//! discarded instead of being shown under the wrong name.

use super::request::RequestStatus;
use crate::api::FetchRequest;
use crate::domain::error::Result;
use crate::domain::{Post, UserId};

/// State container for the posts overlay.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    selected_user_id: Option<UserId>,
    posts: Vec<Post>,
    status: RequestStatus,
    /// User id of the request whose response is still expected.
    pending: Option<UserId>,
}

impl PostStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn selected_user_id(&self) -> Option<UserId> {
        self.selected_user_id
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub const fn status(&self) -> &RequestStatus {
        &self.status
    }

    /// Records `user_id` as the selected user.
    ///
    /// Posts loaded for a previously selected user are dropped.
    pub fn select_user(&mut self, user_id: UserId) {
        if self.selected_user_id != Some(user_id) {
            tracing::debug!(user_id, previous = ?self.selected_user_id, "selecting user");
            self.drop_posts_not_owned_by(user_id);
        }
        self.selected_user_id = Some(user_id);
    }

    /// Starts a load of the posts written by `user_id`.
    ///
    /// Posts of the same user stay visible until the response arrives; posts of
    /// any other user are dropped immediately.
    pub fn load_posts(&mut self, user_id: UserId) -> FetchRequest {
        tracing::debug!(user_id, "loading posts");
        self.drop_posts_not_owned_by(user_id);
        self.status = RequestStatus::Loading;
        self.pending = Some(user_id);
        FetchRequest::Posts { user_id }
    }

    /// Applies the outcome of a posts request issued for `user_id`.
    ///
    /// Responses that do not belong to the outstanding request, or that target
    /// a user other than the selected one, are ignored.
    pub fn receive_posts(&mut self, user_id: UserId, outcome: Result<Vec<Post>>) {
        let selected_elsewhere = self.selected_user_id.is_some_and(|selected| selected != user_id);
        if self.pending != Some(user_id) || selected_elsewhere {
            tracing::debug!(
                user_id,
                pending = ?self.pending,
                selected = ?self.selected_user_id,
                "discarding stale posts response"
            );
            return;
        }
        self.pending = None;

        match outcome {
            Ok(posts) => {
                tracing::debug!(user_id, post_count = posts.len(), "posts received");
                self.posts = posts;
                self.status = RequestStatus::Idle;
            }
            Err(e) => {
                tracing::warn!(user_id, error = %e, "posts request failed");
                self.posts.clear();
                self.status = RequestStatus::Error(e.to_string());
            }
        }
    }

    /// Resets everything: no selection, no posts, idle.
    ///
    /// Any response still in flight will be discarded when it arrives.
    pub fn clear(&mut self) {
        tracing::debug!(selected = ?self.selected_user_id, "clearing posts");
        *self = Self::default();
    }

    /// Dismisses a displayed error. Other states are left alone.
    pub fn clear_error(&mut self) {
        if self.status.error().is_some() {
            self.status = RequestStatus::Idle;
        }
    }

    fn drop_posts_not_owned_by(&mut self, user_id: UserId) {
        if self.posts.iter().any(|post| post.user_id != user_id) {
            self.posts.clear();
        }
    }
}
