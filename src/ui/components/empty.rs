//! Loading and empty state renderers.
//!
//! Both are centered messages drawn where the table rows would go.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

fn render_centered(row: usize, text: &str, color: &str, cols: usize) {
    let len = text.chars().count();
    let padding = (cols.saturating_sub(len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}

pub fn render_loading(row: usize, message: &str, theme: &Theme, cols: usize) {
    render_centered(row + 1, message, &theme.colors.text_dim, cols);
}

pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    render_centered(row + 1, &empty.message, &theme.colors.empty_state_fg, cols);
    print!("{}", Theme::dim());
    render_centered(row + 2, &empty.subtitle, &theme.colors.text_dim, cols);
}
