//! Shared rendering utilities and helpers.
//!
//! Cursor positioning, search match highlighting and the text fitting used
//! both by view model computation and by the components. Widths are
//! counted in characters or terminal columns, never bytes.

use crate::ui::theme::Theme;
use std::borrow::Cow;
use textwrap::{wrap, Options as WrapOptions, WrapAlgorithm};

/// Moves the terminal cursor to a 1-based row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text` with the given character ranges highlighted.
///
/// After each highlighted section the base colors are restored: the
/// selection colors when `is_selected`, the theme's normal text otherwise.
/// Ranges past the end of `text` are ignored.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        if is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Shortens `text` to at most `width` characters, ending in "..." when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut shortened: String = text.chars().take(width - 3).collect();
    shortened.push_str("...");
    shortened
}

/// Right-pads `text` with spaces to `width` characters.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Greedy word wrap to lines of at most `width` columns.
///
/// Existing line breaks are kept. Words longer than `width` are split.
/// An empty input yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let options = WrapOptions::new(width.max(1)).wrap_algorithm(WrapAlgorithm::FirstFit);
    wrap(text, options).into_iter().map(Cow::into_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Zoë", 3), "Zoë");
        assert_eq!(truncate("Clementine Bauch", 10), "Clement...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("quia et suscipit suscipit recusandae", 16),
            vec!["quia et suscipit", "suscipit", "recusandae"]
        );
    }

    #[test]
    fn wrap_keeps_line_breaks_and_splits_long_words() {
        assert_eq!(wrap_text("one\ntwo", 10), vec!["one", "two"]);
        assert_eq!(wrap_text("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
        assert!(wrap_text("", 10).is_empty());
    }
}
