//! Header component renderer.
//!
//! Centered bold title with the "updated … ago" hint right-aligned on the
//! same line.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    let padding = (cols.saturating_sub(title_len)) / 2;

    let updated = header.updated.as_deref().unwrap_or_default();
    let updated_len = updated.chars().count();
    let show_updated = padding + title_len + updated_len + 2 <= cols;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", Theme::reset());

    if show_updated {
        let gap = cols - padding - title_len - updated_len - 1;
        print!("{}", " ".repeat(gap));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{updated} ");
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    }

    print!("{}", Theme::reset());
    row + 1
}
