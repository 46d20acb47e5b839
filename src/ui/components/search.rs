//! Controls line renderer.
//!
//! One line holding the search field, the active sort key and order, and the
//! result count. The search field is drawn in the accent color with a cursor
//! while it has focus.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ControlsInfo;

const SEARCH_FIELD_WIDTH: usize = 30;
const CURSOR: char = '▏';

pub fn render_controls(row: usize, controls: &ControlsInfo, theme: &Theme, cols: usize) -> usize {
    let query = if controls.search_focused {
        format!("{}{CURSOR}", controls.search)
    } else if controls.search.is_empty() {
        "name or email".to_string()
    } else {
        controls.search.clone()
    };
    let query = truncate(&query, SEARCH_FIELD_WIDTH);
    let query_padding = SEARCH_FIELD_WIDTH.saturating_sub(query.chars().count());

    let sort_text = format!(
        "  Sort by: {}  Order: {}  ",
        controls.sort_key, controls.sort_order
    );
    let count_text = format!("{} ", controls.count_label);

    position_cursor(row, 1);
    if controls.search_focused {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.search_bar_border));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!(" Search: ");
    print!("{}", Theme::reset());

    if controls.search_focused || !controls.search.is_empty() {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{query}");
    print!("{}", " ".repeat(query_padding));

    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{sort_text}");

    let used = 9 + SEARCH_FIELD_WIDTH + sort_text.chars().count();
    let count_len = count_text.chars().count();
    if used + count_len <= cols {
        print!("{}", " ".repeat(cols - used - count_len));
        print!("{}", Theme::fg(&theme.colors.search_bar_border));
        print!("{count_text}");
    }
    print!("{}", Theme::reset());

    row + 1
}
