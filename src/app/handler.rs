//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! host events, translating them into store operations and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, web request results)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. Store operations run on the stores owned by `AppState`
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Search**: `SearchMode`, `Char`, `Backspace`, `SubmitSearch`, `ExitSearch`
//! - **Sorting**: `CycleSortKey`, `ToggleSortOrder`
//! - **Overlay**: `ViewPosts`, `CloseOverlay`
//! - **System**: `Startup`, `FetchCompleted`, `Reload`
//!
//! The returned flag tells the runtime whether the pane must be re-rendered.

use crate::api::{decode_response, FetchRequest};
use crate::app::modes::InputMode;
use crate::app::state::OverlayState;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{Post, User};
use crate::storage::SortPreference;

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Plugin permissions were granted and saved preferences were read.
    ///
    /// Applies the preferences and starts the first users load.
    Startup {
        saved_search: Option<String>,
        saved_sort: Option<SortPreference>,
    },

    /// Moves selection down, or scrolls the overlay.
    KeyDown,
    /// Moves selection up, or scrolls the overlay.
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Focuses the search field, keeping the current term.
    SearchMode,
    /// Appends a character to the search term.
    Char(char),
    /// Removes the last character from the search term.
    Backspace,
    /// Leaves search mode keeping the term.
    SubmitSearch,
    /// Leaves search mode and clears the term.
    ExitSearch,

    /// Switches the sort key between name and email.
    CycleSortKey,
    /// Switches the sort order between ascending and descending.
    ToggleSortOrder,

    /// Opens the posts overlay for the selected user and loads their posts.
    ViewPosts,
    /// Closes the overlay and resets the post store.
    CloseOverlay,

    /// Hides the directory error notification.
    DismissError,
    /// Switches between the light and dark theme.
    ToggleTheme,
    /// Loads the user directory again.
    Reload,

    /// A web request issued through [`Action::Fetch`] completed.
    FetchCompleted {
        request: FetchRequest,
        /// HTTP status reported by the host.
        status: u16,
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether a re-render is needed together with the actions to run in
/// order.
///
/// # Errors
///
/// Currently every event is handled in place; failures reported by the host
/// are recorded in the stores rather than returned.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::Startup { saved_search, saved_sort } => {
            tracing::debug!(?saved_search, ?saved_sort, "applying saved preferences");
            if let Some(term) = saved_search {
                state.directory.set_search_term(term.as_str());
            }
            if let Some(sort) = saved_sort {
                state.directory.set_sort_key(sort.key);
                state.directory.set_sort_order(sort.order);
            }
            let request = state.directory.load_users();
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::KeyDown => {
            if state.input_mode == InputMode::Overlay {
                state.scroll_overlay_down();
            } else {
                state.move_selection_down();
            }
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.input_mode == InputMode::Overlay {
                state.scroll_overlay_up();
            } else {
                state.move_selection_up();
            }
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut term = state.directory.search_term().to_string();
            term.push(*c);
            tracing::trace!(query = %term, char = %c, "search term updated");
            Ok((true, update_search(state, term)))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut term = state.directory.search_term().to_string();
            if term.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, update_search(state, term)))
        }
        Event::SubmitSearch => {
            tracing::debug!(query = %state.directory.search_term(), "search submitted");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.directory.search_term(), "clearing search");
            state.input_mode = InputMode::Normal;
            if state.directory.search_term().is_empty() {
                return Ok((true, vec![]));
            }
            Ok((true, update_search(state, String::new())))
        }
        Event::CycleSortKey => {
            let key = state.directory.sort_key().toggled();
            state.directory.set_sort_key(key);
            state.clamp_selection();
            Ok((true, vec![persist_sort(state)]))
        }
        Event::ToggleSortOrder => {
            let order = state.directory.sort_order().toggled();
            state.directory.set_sort_order(order);
            state.clamp_selection();
            Ok((true, vec![persist_sort(state)]))
        }
        Event::ViewPosts => {
            let Some(user) = state.selected_user() else {
                tracing::debug!("no user selected");
                return Ok((false, vec![]));
            };
            let (user_id, user_name) = (user.id, user.name.clone());

            tracing::debug!(user_id, user_name = %user_name, "opening posts overlay");
            state.overlay = Some(OverlayState { user_id, user_name, scroll: 0 });
            state.input_mode = InputMode::Overlay;
            state.posts.select_user(user_id);
            let request = state.posts.load_posts(user_id);
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::CloseOverlay => {
            if state.overlay.take().is_none() {
                return Ok((false, vec![]));
            }
            tracing::debug!("closing posts overlay");
            state.posts.clear();
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::DismissError => {
            if state.directory.status().error().is_none() {
                return Ok((false, vec![]));
            }
            state.directory.clear_error();
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            state.theme = state.theme.toggled();
            tracing::debug!(theme = %state.theme.name, "theme toggled");
            Ok((true, vec![]))
        }
        Event::Reload => {
            let request = state.directory.load_users();
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::FetchCompleted { request, status, body } => {
            let _fetch_span = tracing::debug_span!("fetch_completed",
                resource = request.resource(),
                status = *status,
                bytes = body.len()
            ).entered();

            match *request {
                FetchRequest::Users => {
                    let outcome = decode_response::<Vec<User>>(request.resource(), *status, body);
                    state.directory.receive_users(outcome);
                    state.clamp_selection();
                }
                FetchRequest::Posts { user_id } => {
                    let outcome = decode_response::<Vec<Post>>(request.resource(), *status, body);
                    state.posts.receive_posts(user_id, outcome);
                }
            }
            Ok((true, vec![]))
        }
    }
}

fn update_search(state: &mut AppState, term: String) -> Vec<Action> {
    state.directory.set_search_term(term.as_str());
    state.clamp_selection();
    vec![Action::PersistSearch(term)]
}

fn persist_sort(state: &AppState) -> Action {
    Action::PersistSort(SortPreference::new(
        state.directory.sort_key(),
        state.directory.sort_order(),
    ))
}

/// Debug wrapper that keeps response bodies out of span fields.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::FetchCompleted { request, status, .. } => f
                .debug_struct("FetchCompleted")
                .field("request", request)
                .field("status", status)
                .finish_non_exhaustive(),
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SortKey, SortOrder};
    use crate::store::RequestStatus;
    use crate::ui::theme::Theme;

    const USERS_JSON: &str = r#"[
        {"id": 1, "name": "Bob", "username": "bob", "email": "b@x.com",
         "address": {"street": "", "suite": "", "city": "Gwenborough", "zipcode": "",
                     "geo": {"lat": "0", "lng": "0"}},
         "phone": "", "website": "",
         "company": {"name": "Acme", "catchPhrase": "", "bs": ""}},
        {"id": 2, "name": "Alice", "username": "alice", "email": "a@x.com",
         "address": {"street": "", "suite": "", "city": "Wisokyburgh", "zipcode": "",
                     "geo": {"lat": "0", "lng": "0"}},
         "phone": "", "website": "",
         "company": {"name": "Globex", "catchPhrase": "", "bs": ""}}
    ]"#;

    const POSTS_JSON: &str = r#"[
        {"userId": 2, "id": 11, "title": "hello", "body": "world"},
        {"userId": 2, "id": 12, "title": "again", "body": "more"}
    ]"#;

    fn run(state: &mut AppState, event: Event) -> Vec<Action> {
        handle_event(state, &event).unwrap().1
    }

    fn users_loaded(body: &str) -> Event {
        Event::FetchCompleted {
            request: FetchRequest::Users,
            status: 200,
            body: body.as_bytes().to_vec(),
        }
    }

    fn started() -> AppState {
        let mut state = AppState::new(Theme::default());
        run(&mut state, Event::Startup { saved_search: None, saved_sort: None });
        run(&mut state, users_loaded(USERS_JSON));
        state
    }

    fn visible_names(state: &AppState) -> Vec<&str> {
        state.directory.visible().iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn startup_applies_preferences_and_fetches_users() {
        let mut state = AppState::new(Theme::default());
        let actions = run(&mut state, Event::Startup {
            saved_search: Some("a@".into()),
            saved_sort: Some(SortPreference::new(SortKey::Email, SortOrder::Descending)),
        });

        assert_eq!(actions, vec![Action::Fetch(FetchRequest::Users)]);
        assert!(state.directory.status().is_loading());
        assert_eq!(state.directory.search_term(), "a@");
        assert_eq!(state.directory.sort_key(), SortKey::Email);

        run(&mut state, users_loaded(USERS_JSON));
        assert_eq!(visible_names(&state), ["Alice"]);
    }

    #[test]
    fn typing_filters_and_persists_search() {
        let mut state = started();
        run(&mut state, Event::SearchMode);

        let actions = run(&mut state, Event::Char('b'));
        assert_eq!(actions, vec![Action::PersistSearch("b".into())]);
        assert_eq!(visible_names(&state), ["Bob"]);

        let actions = run(&mut state, Event::Backspace);
        assert_eq!(actions, vec![Action::PersistSearch(String::new())]);
        assert_eq!(visible_names(&state), ["Alice", "Bob"]);
    }

    #[test]
    fn characters_outside_search_mode_are_ignored() {
        let mut state = started();
        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.directory.search_term(), "");
    }

    #[test]
    fn submit_keeps_term_and_exit_clears_it() {
        let mut state = started();
        run(&mut state, Event::SearchMode);
        run(&mut state, Event::Char('a'));
        run(&mut state, Event::Char('l'));
        run(&mut state, Event::SubmitSearch);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.directory.search_term(), "al");

        run(&mut state, Event::SearchMode);
        let actions = run(&mut state, Event::ExitSearch);
        assert_eq!(actions, vec![Action::PersistSearch(String::new())]);
        assert_eq!(state.directory.search_term(), "");
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn sort_changes_are_persisted() {
        let mut state = started();
        let actions = run(&mut state, Event::ToggleSortOrder);
        assert_eq!(
            actions,
            vec![Action::PersistSort(SortPreference::new(SortKey::Name, SortOrder::Descending))]
        );
        assert_eq!(visible_names(&state), ["Bob", "Alice"]);

        let actions = run(&mut state, Event::CycleSortKey);
        assert_eq!(
            actions,
            vec![Action::PersistSort(SortPreference::new(SortKey::Email, SortOrder::Descending))]
        );
    }

    #[test]
    fn view_posts_opens_overlay_and_requests_posts() {
        let mut state = started();
        let actions = run(&mut state, Event::ViewPosts);

        assert_eq!(actions, vec![Action::Fetch(FetchRequest::Posts { user_id: 2 })]);
        assert_eq!(state.input_mode, InputMode::Overlay);
        assert_eq!(state.overlay.as_ref().map(|o| o.user_name.as_str()), Some("Alice"));
        assert_eq!(state.posts.selected_user_id(), Some(2));
        assert!(state.posts.status().is_loading());

        run(&mut state, Event::FetchCompleted {
            request: FetchRequest::Posts { user_id: 2 },
            status: 200,
            body: POSTS_JSON.as_bytes().to_vec(),
        });
        assert_eq!(state.posts.posts().len(), 2);

        run(&mut state, Event::KeyDown);
        assert_eq!(state.overlay.as_ref().map(|o| o.scroll), Some(1));
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn closing_overlay_clears_posts_and_drops_late_response() {
        let mut state = started();
        run(&mut state, Event::ViewPosts);
        run(&mut state, Event::CloseOverlay);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.overlay.is_none());
        assert_eq!(state.posts.selected_user_id(), None);

        run(&mut state, Event::FetchCompleted {
            request: FetchRequest::Posts { user_id: 2 },
            status: 200,
            body: POSTS_JSON.as_bytes().to_vec(),
        });
        assert!(state.posts.posts().is_empty());
        assert_eq!(state.posts.status(), &RequestStatus::Idle);
    }

    #[test]
    fn failed_posts_fetch_shows_error_in_overlay() {
        let mut state = started();
        run(&mut state, Event::ViewPosts);
        run(&mut state, Event::FetchCompleted {
            request: FetchRequest::Posts { user_id: 2 },
            status: 503,
            body: Vec::new(),
        });

        assert_eq!(state.posts.status().error(), Some("Failed to fetch posts (HTTP 503)"));
        assert_eq!(state.posts.selected_user_id(), Some(2));
    }

    #[test]
    fn failed_reload_keeps_users_until_dismissed() {
        let mut state = started();
        let actions = run(&mut state, Event::Reload);
        assert_eq!(actions, vec![Action::Fetch(FetchRequest::Users)]);

        run(&mut state, Event::FetchCompleted {
            request: FetchRequest::Users,
            status: 500,
            body: b"oops".to_vec(),
        });
        assert_eq!(state.directory.users().len(), 2);
        assert!(state.directory.status().error().is_some());

        run(&mut state, Event::DismissError);
        assert_eq!(state.directory.status(), &RequestStatus::Idle);
    }

    #[test]
    fn malformed_users_body_is_an_error() {
        let mut state = AppState::new(Theme::default());
        run(&mut state, Event::Startup { saved_search: None, saved_sort: None });
        run(&mut state, users_loaded("{\"not\": \"a list\"}"));

        let message = state.directory.status().error().unwrap_or_default();
        assert!(message.starts_with("Failed to read users"), "{message}");
    }

    #[test]
    fn theme_toggles_between_light_and_dark() {
        let mut state = AppState::new(Theme::default());
        assert!(!state.theme.dark);
        run(&mut state, Event::ToggleTheme);
        assert!(state.theme.dark);
        run(&mut state, Event::ToggleTheme);
        assert!(!state.theme.dark);
    }

    #[test]
    fn quit_hides_the_plugin() {
        let mut state = started();
        assert_eq!(run(&mut state, Event::CloseFocus), vec![Action::CloseFocus]);
    }
}
