//! View model types representing renderable UI state.
//!
//! View models are created by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They hold display-ready data only: text is
//! already truncated or wrapped, highlight ranges are already computed, and
//! the body variant already reflects the store status.

/// Complete renderable state of the plugin pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub controls: ControlsInfo,
    pub body: DashboardBody,
    /// Directory error notification, shown above the footer.
    pub toast: Option<String>,
    pub footer: FooterInfo,
    pub overlay: Option<OverlayViewModel>,
}

/// What the area below the column headers shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardBody {
    /// A users request is in flight.
    Loading { message: String },
    /// Nothing matches the current search.
    Empty(EmptyState),
    /// The windowed slice of the derived view.
    Rows {
        items: Vec<DisplayItem>,
        /// Index of the selected row within `items`.
        selected_index: usize,
    },
}

/// One user row.
///
/// Highlight ranges are `(start, end)` character indices into the
/// corresponding field, end exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub name: String,
    pub email: String,
    pub company: String,
    pub city: String,
    pub is_selected: bool,
    pub name_highlights: Vec<(usize, usize)>,
    pub email_highlights: Vec<(usize, usize)>,
}

/// Widths of the four table columns, without the separating space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub name: usize,
    pub email: usize,
    pub company: usize,
    pub city: usize,
}

impl ColumnWidths {
    #[must_use]
    pub fn for_width(cols: usize) -> Self {
        let name = cols * 26 / 100;
        let email = cols * 30 / 100;
        let company = cols * 26 / 100;
        let city = cols.saturating_sub(name + email + company);
        Self {
            name: name.saturating_sub(1),
            email: email.saturating_sub(1),
            company: company.saturating_sub(1),
            city: city.saturating_sub(1),
        }
    }
}

/// Title line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// "updated 3m ago", absent until the first successful load.
    pub updated: Option<String>,
}

/// Search and sort controls line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsInfo {
    pub search: String,
    pub search_focused: bool,
    pub sort_key: &'static str,
    pub sort_order: &'static str,
    /// "N users found".
    pub count_label: String,
}

/// Keybinding hints, most important first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub hints: Vec<KeyHint>,
}

/// One `key: action` pair in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }

    /// Rendered width in characters, `key: action`.
    #[must_use]
    pub fn width(&self) -> usize {
        self.key.chars().count() + 2 + self.action.chars().count()
    }
}

/// Message shown when no user matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Centered box listing the selected user's posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayViewModel {
    pub title: String,
    /// Outer width of the box including borders.
    pub width: usize,
    /// Outer height of the box including borders.
    pub height: usize,
    /// Body lines, already wrapped to the inner width.
    pub lines: Vec<OverlayLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLine {
    pub text: String,
    pub style: LineStyle,
}

impl OverlayLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Body,
    Dim,
    Error,
}
