//! Error notification line.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;

pub fn render_toast(row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    let text = truncate(&format!(" ✖ {message}  (Esc to dismiss)"), cols);
    let len = text.chars().count();

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(len)));
    print!("{}", Theme::reset());
    row + 1
}
