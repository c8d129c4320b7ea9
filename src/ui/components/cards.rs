//! Tour card list renderer.
//!
//! This module renders the visible slice of the result page as three-line
//! cards: a name line with rating and featured badge, a metadata line with
//! location, category, duration, and price, and a dimmed description line.
//! It supports selection highlighting and search match highlighting.

use crate::ui::helpers::{self, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Renders all cards starting at the specified row.
///
/// Iterates through the card items and renders each as a three-line card with
/// proper selection and highlight styling.
///
/// # Returns
///
/// The next available row position (row + 3 × number of cards)
pub fn render_cards(row: usize, cards: &[CardItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card(current_row, card, theme, cols);
    }
    current_row
}

/// Renders a single card at the specified row position.
///
/// # Layout
///
/// ```text
/// Name of the Tour                              FEATURED  ★ 4.9 (128)
///   LOCATION · 🏖️ Beach · 8 hours                       Rp 1.200.000
///   Truncated description text...
/// ```
///
/// # Styling Precedence
///
/// 1. Selection colors across all three lines (if selected)
/// 2. Search match highlights on the name (unless selected)
/// 3. Per-field colors (rating, price, featured badge)
///
/// Each line is padded to the terminal width so selection backgrounds render
/// consistently.
fn render_card(row: usize, card: &CardItem, theme: &Theme, cols: usize) -> usize {
    let select_colors = |selected: bool| {
        if selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        }
    };

    // Name line with rating and featured badge on the right.
    position_cursor(row, 1);
    select_colors(card.is_selected);
    if !card.is_selected {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if card.highlight_ranges.is_empty() {
        print!("{}", card.name);
    } else {
        helpers::render_highlighted_text(&card.name, &card.highlight_ranges, theme, card.is_selected);
    }

    let badge = if card.featured { " FEATURED " } else { "" };
    let rating_text = format!("★ {} {}", card.rating, card.reviews);
    let right_len = display_width(badge) + display_width(&rating_text) + 2;
    let name_len = display_width(&card.name);
    print!("{}", " ".repeat(cols.saturating_sub(name_len + right_len)));

    if card.featured {
        if card.is_selected {
            print!("{badge}");
        } else {
            print!("{}", Theme::fg(&theme.colors.featured_fg));
            print!("{}", Theme::bg(&theme.colors.featured_bg));
            print!("{badge}");
            print!("{}", Theme::reset());
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    }
    print!(" ");
    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.rating_fg));
    }
    print!("{rating_text} ");
    print!("{}", Theme::reset());

    // Metadata line: location, category, duration on the left, price right.
    position_cursor(row + 1, 1);
    select_colors(card.is_selected);
    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }

    let meta = format!("  {} · {} · {}", card.location, card.category, card.duration);
    print!("{meta}");

    let price_len = display_width(&card.price) + 1;
    let meta_len = display_width(&meta);
    print!("{}", " ".repeat(cols.saturating_sub(meta_len + price_len)));

    if !card.is_selected {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    print!("{} ", card.price);
    print!("{}", Theme::reset());

    // Description line.
    position_cursor(row + 2, 1);
    select_colors(card.is_selected);
    if !card.is_selected {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }

    let description = format!("  {}", card.description);
    print!("{description}");
    print!(
        "{}",
        " ".repeat(cols.saturating_sub(display_width(&description)))
    );
    print!("{}", Theme::reset());

    row + 3
}
