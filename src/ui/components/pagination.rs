//! Pagination bar renderer.
//!
//! Renders the page controls under the card list: previous/next hints and one
//! numbered slot per page, with the current page highlighted.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders the pagination bar at the specified row.
///
/// Layout: `‹ h  1  2  3  l ›` centered, with the current page number drawn
/// in the chip highlight colors. The previous/next hints dim out at the
/// first/last page to mirror their disabled state.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_pagination(
    row: usize,
    pagination: &PaginationInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    // Width: "‹ h " + N × " n " + " l ›", used for centering.
    let numbers_width: usize = (1..=pagination.total_pages)
        .map(|page| display_width(&page.to_string()) + 2)
        .sum();
    let total_width = 4 + numbers_width + 4;
    let padding = cols.saturating_sub(total_width) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));

    print!("{}", Theme::fg(&theme.colors.text_dim));
    if pagination.current_page == 1 {
        print!("{}", Theme::dim());
    }
    print!("‹ h ");
    print!("{}", Theme::reset());

    for page in 1..=pagination.total_pages {
        if page == pagination.current_page {
            print!("{}", Theme::fg(&theme.colors.chip_active_fg));
            print!("{}", Theme::bg(&theme.colors.chip_active_bg));
            print!(" {page} ");
            print!("{}", Theme::reset());
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!(" {page} ");
            print!("{}", Theme::reset());
        }
    }

    print!("{}", Theme::fg(&theme.colors.text_dim));
    if pagination.current_page == pagination.total_pages {
        print!("{}", Theme::dim());
    }
    print!(" l ›");
    print!("{}", Theme::reset());

    row + 1
}
