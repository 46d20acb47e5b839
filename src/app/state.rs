//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It owns both stores, the table selection, the input mode, and the overlay
//! state, and turns them into a [`UIViewModel`] on demand.
//!
//! # State Components
//!
//! - **Directory**: user collection, search/sort parameters, derived view
//! - **Posts**: posts of the user whose overlay is open
//! - **Selection**: cursor position within the derived view
//! - **Input Mode**: controls keybinding interpretation and footer text
//! - **Overlay**: which user's posts are shown and how far they are scrolled
//!
//! # View Model Computation
//!
//! `compute_viewmodel` handles windowing around the selection, search term
//! highlighting, column truncation and overlay word wrapping for the current
//! terminal dimensions.

use super::modes::InputMode;
use crate::domain::{User, UserId};
use crate::store::{DirectoryStore, PostStore, RequestStatus};
use crate::ui::helpers::{truncate, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnWidths, ControlsInfo, DashboardBody, DisplayItem, EmptyState, FooterInfo, HeaderInfo,
    KeyHint, LineStyle, OverlayLine, OverlayViewModel, UIViewModel,
};
use chrono::{DateTime, Utc};

const TITLE: &str = "Users Dashboard";

/// Rows taken by everything except the table body: blank line, header,
/// border, controls, column headers, bottom border and footer.
const CHROME_ROWS: usize = 7;

/// Horizontal and vertical margin around the posts overlay.
const OVERLAY_MARGIN_X: usize = 4;
const OVERLAY_MARGIN_Y: usize = 2;

/// Posts overlay bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayState {
    pub user_id: UserId,
    /// Name captured when the overlay was opened, used for the title.
    pub user_name: String,
    /// Index of the first post shown.
    pub scroll: usize,
}

/// Central application state container.
///
/// Mutated by the event handler in response to user input and host events.
/// View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// User directory with its derived view.
    pub directory: DirectoryStore,

    /// Posts of the user whose overlay is open.
    pub posts: PostStore,

    /// Zero-based index of the selected row within the derived view.
    ///
    /// Clamped by `clamp_selection()` whenever the view changes. Wraps around
    /// during navigation.
    pub selected_index: usize,

    pub input_mode: InputMode,

    /// Open posts overlay, if any.
    pub overlay: Option<OverlayState>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a state with empty stores in normal mode.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            directory: DirectoryStore::new(),
            posts: PostStore::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            overlay: None,
            theme,
        }
    }

    /// Moves selection down by one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.directory.visible().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection up by one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.directory.visible().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Keeps the selection inside the derived view after it changed.
    pub fn clamp_selection(&mut self) {
        let len = self.directory.visible().len();
        self.selected_index = if len == 0 {
            0
        } else {
            self.selected_index.min(len - 1)
        };
    }

    #[must_use]
    pub fn selected_user(&self) -> Option<&User> {
        self.directory.visible().get(self.selected_index)
    }

    pub fn scroll_overlay_down(&mut self) {
        let post_count = self.posts.posts().len();
        if let Some(overlay) = &mut self.overlay {
            if overlay.scroll + 1 < post_count {
                overlay.scroll += 1;
            }
        }
    }

    pub fn scroll_overlay_up(&mut self) {
        if let Some(overlay) = &mut self.overlay {
            overlay.scroll = overlay.scroll.saturating_sub(1);
        }
    }

    /// Computes a renderable view model for a pane of `rows` x `cols` cells.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let toast = self.directory.status().error().map(str::to_string);

        UIViewModel {
            header: self.compute_header(Utc::now()),
            controls: self.compute_controls(),
            body: self.compute_body(rows, cols, toast.is_some()),
            toast,
            footer: self.compute_footer(),
            overlay: self
                .overlay
                .as_ref()
                .map(|overlay| self.compute_overlay(overlay, rows, cols)),
        }
    }

    fn compute_body(&self, rows: usize, cols: usize, has_toast: bool) -> DashboardBody {
        if self.directory.status().is_loading() {
            return DashboardBody::Loading {
                message: "Loading users…".to_string(),
            };
        }

        let visible = self.directory.visible();
        if visible.is_empty() {
            return DashboardBody::Empty(EmptyState {
                message: "No users found".to_string(),
                subtitle: "Try adjusting your search terms or filters".to_string(),
            });
        }

        let available_rows = Self::calculate_available_rows(rows, has_toast).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(visible.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && visible.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let widths = ColumnWidths::for_width(cols);
        let items = visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, user)| {
                self.compute_display_item(user, visible_start + relative_idx, &widths)
            })
            .collect();

        DashboardBody::Rows {
            items,
            selected_index: self.selected_index.saturating_sub(visible_start),
        }
    }

    fn compute_display_item(&self, user: &User, absolute_idx: usize, widths: &ColumnWidths) -> DisplayItem {
        let term = self.directory.search_term();
        let name = truncate(&user.name, widths.name);
        let email = truncate(&user.email, widths.email);

        DisplayItem {
            name_highlights: clip_ranges(highlight_ranges(&user.name, term), name.chars().count()),
            email_highlights: clip_ranges(highlight_ranges(&user.email, term), email.chars().count()),
            name,
            email,
            company: truncate(&user.company.name, widths.company),
            city: truncate(&user.address.city, widths.city),
            is_selected: absolute_idx == self.selected_index,
        }
    }

    fn compute_header(&self, now: DateTime<Utc>) -> HeaderInfo {
        HeaderInfo {
            title: TITLE.to_string(),
            updated: self
                .directory
                .loaded_at()
                .map(|loaded_at| format!("updated {}", format_age(now - loaded_at))),
        }
    }

    fn compute_controls(&self) -> ControlsInfo {
        let count = self.directory.visible().len();
        ControlsInfo {
            search: self.directory.search_term().to_string(),
            search_focused: self.input_mode == InputMode::Search,
            sort_key: self.directory.sort_key().label(),
            sort_order: self.directory.sort_order().label(),
            count_label: format!("{count} user{} found", if count == 1 { "" } else { "s" }),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let hints = match self.input_mode {
            InputMode::Normal if self.directory.status().error().is_some() => vec![
                KeyHint::new("Esc", "dismiss error"),
                KeyHint::new("r", "retry"),
                KeyHint::new("j/k", "navigate"),
                KeyHint::new("/", "search"),
                KeyHint::new("Enter", "posts"),
                KeyHint::new("q", "quit"),
            ],
            InputMode::Normal => vec![
                KeyHint::new("j/k", "navigate"),
                KeyHint::new("/", "search"),
                KeyHint::new("Enter", "posts"),
                KeyHint::new("s", "sort by"),
                KeyHint::new("o", "order"),
                KeyHint::new("r", "reload"),
                KeyHint::new("t", "theme"),
                KeyHint::new("q", "quit"),
            ],
            InputMode::Search => vec![
                KeyHint::new("Enter", "done"),
                KeyHint::new("Esc", "clear search"),
                KeyHint::new("↑/↓", "navigate"),
            ],
            InputMode::Overlay => vec![
                KeyHint::new("j/k", "scroll"),
                KeyHint::new("Esc/q", "close"),
            ],
        };

        FooterInfo { hints }
    }

    fn compute_overlay(&self, overlay: &OverlayState, rows: usize, cols: usize) -> OverlayViewModel {
        let width = if cols > OVERLAY_MARGIN_X * 2 + 20 {
            cols - OVERLAY_MARGIN_X * 2
        } else {
            cols
        };
        let height = if rows > OVERLAY_MARGIN_Y * 2 + 6 {
            rows - OVERLAY_MARGIN_Y * 2
        } else {
            rows
        };
        let inner_width = width.saturating_sub(4).max(1);

        let mut lines = Vec::new();
        match self.posts.status() {
            RequestStatus::Loading => {
                lines.push(OverlayLine::new("Loading posts…", LineStyle::Dim));
            }
            RequestStatus::Error(message) => {
                lines.extend(
                    wrap_text(message, inner_width)
                        .into_iter()
                        .map(|line| OverlayLine::new(line, LineStyle::Error)),
                );
            }
            RequestStatus::Idle if self.posts.posts().is_empty() => {
                lines.push(OverlayLine::new("No posts found for this user.", LineStyle::Dim));
            }
            RequestStatus::Idle => {
                let count = self.posts.posts().len();
                lines.push(OverlayLine::new(
                    format!("{count} post{} found", if count == 1 { "" } else { "s" }),
                    LineStyle::Dim,
                ));
                lines.push(OverlayLine::new("", LineStyle::Body));

                for post in self.posts.posts().iter().skip(overlay.scroll) {
                    lines.extend(
                        wrap_text(&post.title, inner_width)
                            .into_iter()
                            .map(|line| OverlayLine::new(line, LineStyle::Title)),
                    );
                    lines.extend(
                        wrap_text(&post.body, inner_width)
                            .into_iter()
                            .map(|line| OverlayLine::new(line, LineStyle::Body)),
                    );
                    lines.push(OverlayLine::new("", LineStyle::Body));
                }
            }
        }

        OverlayViewModel {
            title: truncate(&format!("Posts by {}", overlay.user_name), inner_width.saturating_sub(2)),
            width,
            height,
            lines,
        }
    }

    const fn calculate_available_rows(total_rows: usize, has_toast: bool) -> usize {
        let chrome = if has_toast { CHROME_ROWS + 1 } else { CHROME_ROWS };
        total_rows.saturating_sub(chrome)
    }
}

/// Character ranges of every case-insensitive occurrence of `term` in `text`.
///
/// Returns `(start, end)` pairs of character indices into `text`, end
/// exclusive, in order and non-overlapping. The term is matched literally.
#[must_use]
pub fn highlight_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return vec![];
    }
    let needle = term.to_lowercase();

    // Lowercasing can change lengths, so remember which original character
    // produced each byte of the lowered text.
    let mut lowered = String::with_capacity(text.len());
    let mut owner = Vec::with_capacity(text.len());
    for (idx, c) in text.chars().enumerate() {
        for lc in c.to_lowercase() {
            lowered.push(lc);
            owner.extend(std::iter::repeat(idx).take(lc.len_utf8()));
        }
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for (start, matched) in lowered.match_indices(&needle) {
        let first = owner[start];
        let last = owner[start + matched.len() - 1];
        match ranges.last_mut() {
            Some((_, end)) if *end > first => *end = last + 1,
            _ => ranges.push((first, last + 1)),
        }
    }
    ranges
}

fn clip_ranges(ranges: Vec<(usize, usize)>, len: usize) -> Vec<(usize, usize)> {
    ranges
        .into_iter()
        .filter(|&(start, _)| start < len)
        .map(|(start, end)| (start, end.min(len)))
        .collect()
}

/// Short relative age: "just now", "5m ago", "2h ago", "3d ago".
#[must_use]
pub fn format_age(elapsed: chrono::Duration) -> String {
    let seconds = elapsed.num_seconds();
    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3_600)
    } else {
        format!("{}d ago", seconds / 86_400)
    }
}
