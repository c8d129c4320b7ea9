//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-computed display
//! information like formatted prices, truncated descriptions, match highlight
//! ranges, and pagination labels. They contain no business logic.

/// Complete UI view model for one frame.
///
/// Computed by `AppState::compute_viewmodel()` and consumed by the renderer.
/// At most one of `loading`, `empty_state`, and a non-empty `cards` list is
/// meaningful at a time; `detail` overrides the card list entirely.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Cards for the visible slice of the current page.
    pub cards: Vec<CardItem>,

    /// Index of the selected card within `cards`.
    pub selected_index: usize,

    /// Header information (title, result count).
    pub header: HeaderInfo,

    /// Category chips and the active sort label.
    pub filter_bar: FilterBarInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Pagination bar, present when there is more than one page.
    pub pagination: Option<PaginationInfo>,

    /// Search input box, present while in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Loading message, present while a refresh is in flight.
    pub loading: Option<LoadingInfo>,

    /// Empty state message, present when no listings match the filters.
    pub empty_state: Option<EmptyState>,

    /// Full-screen detail view of the selected listing, present in detail mode.
    pub detail: Option<DetailView>,
}

/// Display information for a single tour card.
#[derive(Debug, Clone)]
pub struct CardItem {
    /// Listing name, truncated to fit the card width.
    pub name: String,

    /// Uppercased location, e.g. `BALI`.
    pub location: String,

    /// Category icon and label, e.g. `🤿 Diving`.
    pub category: String,

    /// Free-text duration label, e.g. `8 hours`.
    pub duration: String,

    /// Description, truncated to one card line.
    pub description: String,

    /// Formatted price, e.g. `Rp 1.200.000`.
    pub price: String,

    /// Formatted rating, e.g. `4.9`.
    pub rating: String,

    /// Review count in parentheses, e.g. `(128)`.
    pub reviews: String,

    /// Whether the listing carries the featured badge.
    pub featured: bool,

    /// Whether this card is currently selected.
    pub is_selected: bool,

    /// Character ranges of the name matching the search text.
    ///
    /// Each tuple is `(start, end)` in character indices, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// One category chip in the filter bar.
#[derive(Debug, Clone)]
pub struct Chip {
    /// Chip text, e.g. `All` or `🏖️ Beach`.
    pub label: String,

    /// Whether this chip is the active filter.
    pub active: bool,
}

/// Filter bar display information: category chips plus the sort label.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    /// "All" followed by one chip per category.
    pub chips: Vec<Chip>,

    /// Active sort order label, e.g. `Highest Rating`.
    pub sort_label: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: quit  /: search  c: category").
    pub keybindings: String,
}

/// Pagination bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Current page, 1-based.
    pub current_page: usize,

    /// Total number of pages, at least 1.
    pub total_pages: usize,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Loading state display information.
#[derive(Debug, Clone)]
pub struct LoadingInfo {
    /// Message shown while a refresh is pending.
    pub message: String,
}

/// Empty state message display information.
///
/// Shown when the filtered listing set is empty.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No Adventures Found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Full detail view of one listing.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub name: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub price: String,
    pub rating: String,
    pub reviews: String,
    pub duration: String,
    pub image: String,
    pub featured: bool,
}
