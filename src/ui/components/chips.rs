//! Category chip row renderer.
//!
//! Renders the filter bar: one chip per category (plus "All"), with the
//! active chip highlighted, and the current sort order label right-aligned.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Renders the category chips and sort label at the specified row.
///
/// Inactive chips use dimmed text; the active chip gets the chip highlight
/// colors. The sort label is pushed to the right edge when it fits.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_filter_bar(row: usize, filter_bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 1;
    print!(" ");

    for chip in &filter_bar.chips {
        let chip_text = format!(" {} ", chip.label);
        let chip_width = display_width(&chip_text) + 1;
        if used + chip_width >= cols {
            break;
        }

        if chip.active {
            print!("{}", Theme::fg(&theme.colors.chip_active_fg));
            print!("{}", Theme::bg(&theme.colors.chip_active_bg));
            print!("{chip_text}");
            print!("{}", Theme::reset());
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{chip_text}");
            print!("{}", Theme::reset());
        }
        print!(" ");
        used += chip_width;
    }

    let sort_text = format!("Sort: {} ", filter_bar.sort_label);
    let sort_len = display_width(&sort_text);
    if used + sort_len < cols {
        let padding = cols - used - sort_len;
        print!("{}", " ".repeat(padding));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{sort_text}");
        print!("{}", Theme::reset());
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(used)));
    }

    row + 1
}
