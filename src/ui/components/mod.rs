//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with branding and result count
//! - [`chips`]: Category chip row with the sort label
//! - [`cards`]: Three-line tour cards for the visible page
//! - [`pagination`]: Page controls under the card list
//! - [`search`]: Search input box (border, query text)
//! - [`loading`]: Centered message while a refresh is pending
//! - [`empty`]: Empty state message for zero results
//! - [`detail`]: Full listing detail block
//! - [`footer`]: Help text and keybinding hints
//!
//! # Layout Modes
//!
//! The module provides three high-level layout functions:
//!
//! - [`render_normal_mode`]: Header + Chips + Cards/Loading/Empty + Footer
//! - [`render_search_mode`]: the same with the search box inserted
//! - [`render_detail_mode`]: Header + Detail + Footer

mod cards;
mod chips;
mod detail;
mod empty;
mod footer;
mod header;
mod loading;
mod pagination;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UiViewModel};

use cards::render_cards;
use chips::render_filter_bar;
use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use loading::render_loading;
use pagination::render_pagination;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/content, content/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the body shared by normal and search modes: cards with their
/// pagination bar, or the loading/empty message when there is nothing to
/// list yet.
fn render_body(start_row: usize, vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    if let Some(loading) = &vm.loading {
        render_loading(start_row, loading, theme, cols);
        return;
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(start_row, empty, theme, cols);
        return;
    }

    let after_cards = render_cards(start_row, &vm.cards, theme, cols);

    if let Some(pagination) = &vm.pagination {
        let pagination_row = after_cards.max(rows.saturating_sub(3));
        render_pagination(pagination_row, pagination, theme, cols);
    }
}

/// Renders the normal mode layout (no search bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Filter bar]
/// [Cards | Loading | Empty]
/// [Pagination]
/// [Border]
/// [Footer]
/// ```
pub fn render_normal_mode(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);

    render_body(current_row + 1, vm, theme, cols, rows);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the search mode layout (with search bar).
///
/// Same as normal mode with the 3-line search box between the filter bar
/// and the body.
pub fn render_search_mode(
    vm: &UiViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    current_row = render_search_bar(current_row, search, theme, cols);

    render_body(current_row + 1, vm, theme, cols, rows);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the detail mode layout.
///
/// Shows the header and footer chrome with the full listing detail block in
/// between.
pub fn render_detail_mode(
    vm: &UiViewModel,
    detail: &crate::ui::viewmodel::DetailView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    render_detail(current_row + 1, detail, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
