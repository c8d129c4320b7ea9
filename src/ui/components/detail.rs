//! Detail view renderer.
//!
//! Renders the full information block for a single listing: name, metadata,
//! price, rating, and the complete word-wrapped description.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Left margin of the detail block.
const DETAIL_MARGIN: usize = 4;

/// Renders the detail view starting at the specified row.
///
/// # Layout
///
/// ```text
///     Raja Ampat Diving Experience              FEATURED
///     PAPUA · 🤿 Diving · 2 days
///     ★ 5.0 · 76 reviews
///     Rp 3.200.000 per person
///
///     Full description, word-wrapped to the
///     available width.
///
///     https://example.com/photo.jpg
/// ```
///
/// # Returns
///
/// The next available row position
pub fn render_detail(row: usize, detail: &DetailView, theme: &Theme, cols: usize) -> usize {
    let margin = " ".repeat(DETAIL_MARGIN);
    let text_width = cols.saturating_sub(DETAIL_MARGIN * 2).max(20);
    let mut current_row = row;

    position_cursor(current_row, 1);
    print!("{margin}");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", detail.name);
    print!("{}", Theme::reset());
    if detail.featured {
        print!("  ");
        print!("{}", Theme::fg(&theme.colors.featured_fg));
        print!("{}", Theme::bg(&theme.colors.featured_bg));
        print!(" FEATURED ");
        print!("{}", Theme::reset());
    }
    current_row += 1;

    position_cursor(current_row, 1);
    print!("{margin}");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(
        "{} · {} · {}",
        detail.location.to_uppercase(),
        detail.category,
        detail.duration
    );
    print!("{}", Theme::reset());
    current_row += 1;

    position_cursor(current_row, 1);
    print!("{margin}");
    print!("{}", Theme::fg(&theme.colors.rating_fg));
    print!("★ {}", detail.rating);
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" · {}", detail.reviews);
    print!("{}", Theme::reset());
    current_row += 1;

    position_cursor(current_row, 1);
    print!("{margin}");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.price_fg));
    print!("{}", detail.price);
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" per person");
    print!("{}", Theme::reset());
    current_row += 2;

    print!("{}", Theme::fg(&theme.colors.text_normal));
    for line in wrap_words(&detail.description, text_width) {
        position_cursor(current_row, 1);
        print!("{margin}{line}");
        current_row += 1;
    }
    print!("{}", Theme::reset());

    if !detail.image.is_empty() {
        current_row += 1;
        position_cursor(current_row, 1);
        print!("{margin}");
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", detail.image);
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}

/// Greedy word wrap to a maximum line width.
///
/// Words longer than the width get a line of their own rather than being
/// split mid-word.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if display_width(&current) + 1 + display_width(word) <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_respects_width() {
        let lines = wrap_words("Explore the underwater paradise of Raja Ampat", 20);
        assert!(lines.iter().all(|line| line.chars().count() <= 20));
        assert_eq!(lines.join(" "), "Explore the underwater paradise of Raja Ampat");
    }

    #[test]
    fn oversized_words_get_their_own_line() {
        let lines = wrap_words("tiny supercalifragilistic tiny", 10);
        assert_eq!(lines[1], "supercalifragilistic");
    }
}
