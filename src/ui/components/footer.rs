//! Footer component renderer.
//!
//! Hints are laid out left to right and centered as a group. When the pane
//! is too narrow, trailing hints are dropped whole instead of being cut.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, KeyHint};

const SEPARATOR: &str = "  ";

/// Number of leading hints that fit in `cols`, and their total width.
fn fitting_hints(hints: &[KeyHint], cols: usize) -> (usize, usize) {
    let mut used = 0;
    for (count, hint) in hints.iter().enumerate() {
        let extra = if count == 0 { hint.width() } else { SEPARATOR.len() + hint.width() };
        if used + extra > cols {
            return (count, used);
        }
        used += extra;
    }
    (hints.len(), used)
}

pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let (count, width) = fitting_hints(&footer.hints, cols);
    let padding = cols.saturating_sub(width) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    for (i, hint) in footer.hints[..count].iter().enumerate() {
        if i > 0 {
            print!("{SEPARATOR}");
        }
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
        print!("{}", hint.key);
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!(": {}", hint.action);
        print!("{}", Theme::reset());
    }
    print!("{}", " ".repeat(cols.saturating_sub(padding + width)));
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints() -> Vec<KeyHint> {
        vec![KeyHint::new("j/k", "navigate"), KeyHint::new("q", "quit")]
    }

    #[test]
    fn all_hints_fit_in_a_wide_pane() {
        // "j/k: navigate" + "  " + "q: quit"
        assert_eq!(fitting_hints(&hints(), 80), (2, 22));
    }

    #[test]
    fn narrow_pane_drops_trailing_hints() {
        assert_eq!(fitting_hints(&hints(), 20), (1, 13));
        assert_eq!(fitting_hints(&hints(), 5), (0, 0));
    }
}
