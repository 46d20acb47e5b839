//! Table component renderer.
//!
//! Renders the user list as a four-column table (NAME, EMAIL, COMPANY, CITY)
//! with selection coloring and search term highlighting in the first two
//! columns.

use crate::ui::helpers::{self, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnWidths, DisplayItem};

pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let widths = ColumnWidths::for_width(cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{} {} {} {}",
        pad("NAME", widths.name),
        pad("EMAIL", widths.email),
        pad("COMPANY", widths.company),
        pad("CITY", widths.city)
    );
    print!("{}", Theme::reset());
    row + 1
}

pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let widths = ColumnWidths::for_width(cols);
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, &widths);
    }
    current_row
}

fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, widths: &ColumnWidths) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    render_cell(&item.name, &item.name_highlights, widths.name, theme, item.is_selected);
    print!(" ");
    render_cell(&item.email, &item.email_highlights, widths.email, theme, item.is_selected);
    print!(" ");
    print!("{} ", pad(&item.company, widths.company));
    print!("{}", pad(&item.city, widths.city));

    print!("{}", Theme::reset());
    row + 1
}

fn render_cell(text: &str, highlights: &[(usize, usize)], width: usize, theme: &Theme, is_selected: bool) {
    helpers::render_highlighted_text(text, highlights, theme, is_selected);
    print!("{}", " ".repeat(width.saturating_sub(text.chars().count())));
}
