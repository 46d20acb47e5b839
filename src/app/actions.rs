//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never touches the host directly. It mutates
//! [`AppState`](crate::app::AppState) and returns a `Vec<Action>`; the
//! plugin runtime executes the actions in order after each event.

use crate::api::FetchRequest;
use crate::storage::SortPreference;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues an HTTP request through the host.
    ///
    /// The response comes back later as a `FetchCompleted` event carrying the
    /// same request.
    Fetch(FetchRequest),

    /// Persists the current search term.
    PersistSearch(String),

    /// Persists the current sort key and order.
    PersistSort(SortPreference),
}
