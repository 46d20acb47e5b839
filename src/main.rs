//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the userdeck library
//! and the Zellij plugin system. It implements `ZellijPlugin`, translates
//! host events into library events and carries out the actions the library
//! returns.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `WebRequestResult` and
//!    `PermissionRequestResult` events
//! 3. **Startup**: Once web access is granted, read saved preferences and
//!    issue the users request
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Network Access
//!
//! The library never talks to the network. [`Action::Fetch`] becomes a host
//! `web_request` whose context map carries the request descriptor; the
//! matching `WebRequestResult` is routed back as `Event::FetchCompleted`.
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In normal mode:
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `Enter`: Show posts of the selected user
//! - `/`: Focus the search field
//! - `s`: Switch sort key
//! - `o`: Switch sort order
//! - `r`: Reload users
//! - `t`: Switch theme
//! - `Esc`: Dismiss error
//! - `q`: Close plugin
//!
//! In search mode:
//! - Any character: Type into the search field
//! - `Backspace`: Delete last character
//! - `Enter`: Keep the term and leave the field
//! - `Esc`: Clear the term and leave the field
//! - `Down`/`Up`: Move selection
//!
//! In the posts overlay:
//! - `j`/`k`/`Down`/`Up`: Scroll
//! - `Esc`/`q`: Close overlay

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use userdeck::api::ApiClient;
use userdeck::infrastructure::preferences_path;
use userdeck::storage::{JsonPreferences, Preferences, SortPreference, SEARCH_KEY, SORT_KEY};
use userdeck::{handle_event, Action, Config, Event, FetchRequest, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the Zellij-side concerns: the API
/// endpoint that fetch actions resolve against and the preference file.
struct State {
    /// Core application state from library layer.
    app: userdeck::AppState,

    client: ApiClient,

    preferences: Preferences<JsonPreferences>,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: userdeck::initialize(&default_config),
            client: default_config.api_client(),
            preferences: Preferences::new(JsonPreferences::new(preferences_path())),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes application state, requests web
    /// access and subscribes to events. Nothing is fetched until the
    /// permission request is answered.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        userdeck::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.app = userdeck::initialize(&config);
        self.client = config.api_client();
        tracing::debug!(api_base_url = %self.client.base_url(), "parsed configuration");

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_event(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match self.map_permission_result(permissions) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        userdeck::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        match self.app.input_mode {
            InputMode::Normal => Self::map_normal_key(key.bare_key),
            InputMode::Search => Self::map_search_key(key.bare_key),
            InputMode::Overlay => Self::map_overlay_key(key.bare_key),
        }
    }

    fn map_normal_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::ViewPosts,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('s') => Event::CycleSortKey,
            BareKey::Char('o') => Event::ToggleSortOrder,
            BareKey::Char('r') => Event::Reload,
            BareKey::Char('t') => Event::ToggleTheme,
            BareKey::Esc => Event::DismissError,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_search_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Enter => Event::SubmitSearch,
            BareKey::Esc => Event::ExitSearch,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_overlay_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Esc | BareKey::Char('q') => Event::CloseOverlay,
            _ => return None,
        })
    }

    fn map_web_request_event(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        tracing::debug!(status, body_len = body.len(), "web request result");

        let Some(request) = FetchRequest::from_context(context) else {
            tracing::debug!(?context, "ignoring web request result with unknown context");
            return None;
        };

        Some(Event::FetchCompleted {
            request,
            status,
            body,
        })
    }

    /// Reads saved preferences once web access is granted.
    fn map_permission_result(&self, permissions: PermissionStatus) -> Option<Event> {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - restoring preferences");
                let saved_search = self.preferences.load::<String>(SEARCH_KEY);
                let saved_sort = self.preferences.load::<SortPreference>(SORT_KEY);
                Some(Event::Startup {
                    saved_search,
                    saved_sort,
                })
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied - the user directory cannot be loaded");
                None
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(request) => {
                let url = self.client.url_for(*request);
                tracing::debug!(%url, "issuing web request");
                web_request(
                    url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.to_context(),
                );
            }
            Action::PersistSearch(ref term) => {
                self.preferences.save(SEARCH_KEY, term.as_str());
            }
            Action::PersistSort(ref sort) => {
                self.preferences.save(SORT_KEY, sort);
            }
        }
    }
}
