//! Loading state component renderer.
//!
//! Renders the centered message shown while a refresh is in flight.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LoadingInfo;

/// Renders the loading message.
///
/// Displayed in place of the card list while the background refresh waits
/// out its artificial latency.
pub fn render_loading(row: usize, loading: &LoadingInfo, theme: &Theme, cols: usize) {
    let msg_len = display_width(&loading.message);
    let padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(row + 2, 1);
    print!("{}", Theme::fg(&theme.colors.loading_fg));
    print!("{}", " ".repeat(padding));
    print!("{}", loading.message);
    print!("{}", " ".repeat(cols.saturating_sub(padding + msg_len)));
    print!("{}", Theme::reset());
}
