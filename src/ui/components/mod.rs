//! Composable UI component renderers.
//!
//! Each component draws one part of the pane at an explicit row and returns
//! the next free row where that makes sense.
//!
//! # Components
//!
//! - `header`: Title bar with the last-update hint
//! - `search`: Search field, sort settings and result count
//! - `table`: User list with NAME, EMAIL, COMPANY, CITY columns
//! - `empty`: Loading and no-results messages
//! - `toast`: Directory error notification
//! - `footer`: Keybinding hints
//! - `overlay`: Posts box drawn over the dashboard

mod empty;
mod footer;
mod header;
mod overlay;
mod search;
mod table;
mod toast;

pub use overlay::render_overlay;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DashboardBody, UIViewModel};

use empty::{render_empty_state, render_loading};
use footer::render_footer;
use header::render_header;
use search::render_controls;
use table::{render_table_headers, render_table_rows};
use toast::render_toast;

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws the dashboard: header, controls, table or state message, error
/// notification and footer.
pub fn render_dashboard(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_controls(current_row, &vm.controls, theme, cols);
    current_row = render_table_headers(current_row, theme, cols);

    match &vm.body {
        DashboardBody::Loading { message } => render_loading(current_row, message, theme, cols),
        DashboardBody::Empty(empty) => render_empty_state(current_row, empty, theme, cols),
        DashboardBody::Rows { items, .. } => {
            render_table_rows(current_row, items, theme, cols);
        }
    }

    let footer_start = rows;
    let border_row = footer_start.saturating_sub(1);

    if let Some(message) = &vm.toast {
        render_toast(border_row.saturating_sub(1), message, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
