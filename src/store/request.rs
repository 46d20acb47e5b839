//! Request lifecycle shared by both stores.

/// State of the most recent fetch issued by a store.
///
/// Views render purely from this variant: `Loading` shows a spinner line,
/// `Error` shows the message, `Idle` shows the data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// No request outstanding and no error to show.
    #[default]
    Idle,
    /// A request was issued and has not completed.
    Loading,
    /// The last request failed with this message.
    Error(String),
}

impl RequestStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The error message, if the last request failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            Self::Idle | Self::Loading => None,
        }
    }
}
