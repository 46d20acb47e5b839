//! Posts overlay renderer.
//!
//! Draws a bordered box centered in the pane on top of the dashboard. The
//! title sits in the top border; body lines beyond the box height are cut.

use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{LineStyle, OverlayViewModel};

pub fn render_overlay(overlay: &OverlayViewModel, theme: &Theme, rows: usize, cols: usize) {
    if overlay.width < 4 || overlay.height < 3 {
        return;
    }

    let top = (rows.saturating_sub(overlay.height)) / 2 + 1;
    let left = (cols.saturating_sub(overlay.width)) / 2 + 1;
    let inner_width = overlay.width - 2;
    let text_width = inner_width.saturating_sub(2);
    let body_rows = overlay.height - 2;

    let title = format!(" {} ", overlay.title);
    let title_len = title.chars().count();

    position_cursor(top, left);
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("┌─");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.overlay_title_fg));
    print!("{title}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("{}┐", "─".repeat(inner_width.saturating_sub(title_len + 1)));
    print!("{}", Theme::reset());

    for offset in 0..body_rows {
        position_cursor(top + 1 + offset, left);
        print!("{}", Theme::fg(&theme.colors.overlay_border));
        print!("│ ");

        match overlay.lines.get(offset) {
            Some(line) => {
                match line.style {
                    LineStyle::Title => {
                        print!("{}", Theme::bold());
                        print!("{}", Theme::fg(&theme.colors.header_fg));
                    }
                    LineStyle::Body => print!("{}", Theme::fg(&theme.colors.text_normal)),
                    LineStyle::Dim => print!("{}", Theme::fg(&theme.colors.text_dim)),
                    LineStyle::Error => print!("{}", Theme::fg(&theme.colors.error_fg)),
                }
                print!("{}", pad(&line.text, text_width));
            }
            None => print!("{}", " ".repeat(text_width)),
        }

        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.overlay_border));
        print!(" │");
        print!("{}", Theme::reset());
    }

    position_cursor(top + overlay.height - 1, left);
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}
