//! Userdeck: a Zellij plugin for browsing a user directory and its posts.
//!
//! Userdeck is a terminal dashboard that provides:
//! - A searchable, sortable table of the users served by a JSON directory API
//! - Highlighting of the search term inside names and emails
//! - A posts overlay listing everything the selected user has written
//! - Search and sort preferences that survive plugin restarts
//! - Light and dark themes, switchable at runtime

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event handling
//! │  - Event handling and action dispatching            │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Stores        │   │ API Layer     │   │ UI Layer      │
//! │ (store/)      │   │ (api/)        │   │ (ui/)         │
//! │ - Directory   │   │ - Requests    │   │ - Rendering   │
//! │ - Posts       │   │ - Decoding    │   │ - Theming     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage, Infrastructure & Domain Layers            │
//! │  - Preferences (storage/)                           │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Users, posts, sort settings, errors (domain/)    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`api`]: Request descriptors and response decoding
//! - [`domain`]: Core domain types (User, Post, sort settings, errors)
//! - [`infrastructure`]: Sandbox paths
//! - [`store`]: Directory and post stores
//! - [`storage`]: Preference persistence
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Logging to a rotating file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/userdeck.wasm" {
//!         api_base_url "https://jsonplaceholder.typicode.com"
//!         theme "catppuccin-mocha"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load**: parse configuration, initialize tracing, build
//!    `AppState` with the theme, request web access, subscribe to events.
//! 2. **Permission Granted**: read saved preferences, dispatch `Startup`,
//!    which applies them and issues the users request.
//! 3. **Web Request Result**: route by request context to the directory or
//!    post store, recompute the view, render.

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod store;
pub mod ui;

pub use api::{ApiClient, FetchRequest, DEFAULT_API_BASE_URL};
pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{Result, UserdeckError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from the Zellij layout.
///
/// All fields are optional in the KDL block; missing or invalid values fall
/// back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the directory API, without trailing slash.
    pub api_base_url: String,

    /// Bundled theme name (`catppuccin-latte` or `catppuccin-mocha`).
    pub theme_name: Option<String>,

    /// Path to a custom theme TOML file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for the log file, e.g. `"debug"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the plugin configuration map handed over by Zellij.
    ///
    /// Recognized keys: `api_base_url`, `theme`, `theme_file`, `trace_level`.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let api_base_url = config
            .get("api_base_url")
            .and_then(|url| match parse_base_url(url) {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring api_base_url");
                    None
                }
            })
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            api_base_url,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    #[must_use]
    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(self.api_base_url.as_str())
    }
}

/// Validates an API base URL and drops any trailing slash.
///
/// # Errors
///
/// Returns [`UserdeckError::Config`] unless the URL is non-empty and uses
/// `http` or `https`.
pub fn parse_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let has_host = ["https://", "http://"]
        .iter()
        .any(|scheme| trimmed.len() > scheme.len() && trimmed.starts_with(scheme));

    if has_host {
        Ok(trimmed.to_string())
    } else {
        Err(UserdeckError::Config(format!(
            "api_base_url must be an http(s) URL, got {url:?}"
        )))
    }
}

/// Builds the initial application state from the configuration.
///
/// A custom theme file wins over a theme name; anything that fails to load
/// falls back to the default light theme.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_base_url = %config.api_base_url, "initializing userdeck plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}
