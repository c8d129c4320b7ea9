//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! browser, along with methods for filter management, selection, pagination,
//! refresh scheduling, and UI view model generation. It serves as the single
//! source of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the immutable catalog) from derived state
//! (the filtered listing set, selection, page) to maintain consistency and
//! simplify state transitions. The filtered set is never recomputed inline:
//! filter changes call [`AppState::begin_refresh`] to obtain a request for
//! the background refresh task, and results land through
//! [`AppState::apply_refresh`], which rejects responses from superseded
//! requests by generation number.
//!
//! # State Components
//!
//! - **Catalog**: Master listing set, loaded once and never mutated
//! - **Filters**: Search text, category, sort order
//! - **Filtered listings**: Result of the most recent completed refresh
//! - **Selection**: Cursor position within filtered results (page derives
//!   from it)
//! - **Input Mode**: Controls keybinding interpretation and UI layout
//! - **View Mode**: Determines the base listing set (all vs. featured)
//! - **Loading**: Whether a refresh is in flight

use super::modes::{InputMode, ViewMode};
use crate::catalog::{SortOrder, TourQuery};
use crate::domain::{Category, TourListing};
use crate::ui::theme::Theme;
use crate::ui::viewmodel;
use crate::worker::{RefreshRequest, RefreshResponse};
use std::time::Duration;

/// Lines one card occupies in the list view.
const CARD_HEIGHT: usize = 3;

/// Maximum characters of a listing name shown on a card.
const NAME_DISPLAY_WIDTH: usize = 48;

/// Central application state container.
///
/// Holds all transient UI state including the catalog, filter criteria,
/// refresh bookkeeping, selection, and mode information. Mutated by the event
/// handler in response to user input and refresh responses. View models are
/// computed on-demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Master list of all listings loaded from the catalog source.
    ///
    /// Catalog order is the tie-break order for every sort. Never mutated
    /// after startup.
    pub catalog: Vec<TourListing>,

    /// Listings matching the current filters, in display order.
    ///
    /// Installed by `apply_refresh()` when a refresh completes. Used for
    /// rendering and selection bounds checking.
    pub filtered_tours: Vec<TourListing>,

    /// Current search text. Matched case-insensitively against listing
    /// names, descriptions, and locations.
    pub query_text: String,

    /// Active category filter. `None` shows all categories.
    pub category: Option<Category>,

    /// Active sort order for the filtered set.
    pub sort: SortOrder,

    /// Zero-based index of the selected listing within `filtered_tours`.
    ///
    /// The current page derives from this index and the page size. Wraps
    /// around during navigation via `move_selection_up/down()`.
    pub selected_index: usize,

    /// Listings per page. Defaults to 6.
    pub page_size: usize,

    /// Current input handling mode.
    ///
    /// Determines active keybindings and UI layout (search bar visibility,
    /// footer text, detail view). Changed by mode switching events.
    pub input_mode: InputMode,

    /// Current view filtering mode.
    ///
    /// Determines the base listing set before search filtering. Toggled by
    /// the featured-view event.
    pub view_mode: ViewMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Whether a refresh is in flight. Drives the loading display.
    pub loading: bool,

    /// Generation number of the most recently scheduled refresh.
    ///
    /// Responses carrying any other generation are discarded, so a slow
    /// superseded refresh can never overwrite newer results.
    pub refresh_generation: u64,

    /// Artificial latency applied to every refresh.
    pub refresh_delay: Duration,
}

impl AppState {
    /// Creates a new application state over a loaded catalog.
    ///
    /// The filtered set starts empty and `loading` starts `true`; the caller
    /// is expected to schedule the initial refresh via [`Self::begin_refresh`]
    /// before entering the event loop.
    #[must_use]
    pub fn new(
        catalog: Vec<TourListing>,
        theme: Theme,
        page_size: usize,
        refresh_delay: Duration,
    ) -> Self {
        Self {
            catalog,
            filtered_tours: vec![],
            query_text: String::new(),
            category: None,
            sort: SortOrder::default(),
            selected_index: 0,
            page_size: page_size.max(1),
            input_mode: InputMode::Normal,
            view_mode: ViewMode::All,
            theme,
            loading: true,
            refresh_generation: 0,
            refresh_delay,
        }
    }

    /// The current search criteria as a query value.
    #[must_use]
    pub fn current_query(&self) -> TourQuery {
        TourQuery {
            text: self.query_text.clone(),
            category: self.category,
            sort: self.sort,
        }
    }

    /// The base listing set for the active view mode.
    ///
    /// This is what the search filter runs against: the whole catalog in the
    /// all-listings view, or only featured listings in the featured view.
    #[must_use]
    pub fn base_listings(&self) -> Vec<TourListing> {
        match self.view_mode {
            ViewMode::All => self.catalog.clone(),
            ViewMode::Featured => self
                .catalog
                .iter()
                .filter(|listing| listing.featured)
                .cloned()
                .collect(),
        }
    }

    /// Starts a new refresh: bumps the generation, flags loading, resets the
    /// selection, and returns the request to hand to the refresh task.
    ///
    /// Any refresh still in flight is implicitly superseded; its response
    /// will fail the generation check in [`Self::apply_refresh`].
    pub fn begin_refresh(&mut self) -> RefreshRequest {
        self.refresh_generation += 1;
        self.loading = true;
        self.selected_index = 0;

        tracing::debug!(
            generation = self.refresh_generation,
            query = %self.query_text,
            category = ?self.category,
            sort = self.sort.name(),
            view_mode = ?self.view_mode,
            "refresh scheduled"
        );

        RefreshRequest::new(
            self.refresh_generation,
            self.base_listings(),
            self.current_query(),
            self.refresh_delay,
        )
    }

    /// Installs a refresh response, unless it is stale.
    ///
    /// A response is stale when its generation does not match the most
    /// recently scheduled refresh; stale responses leave state untouched.
    /// Returns whether the state changed (i.e., a re-render is needed).
    pub fn apply_refresh(&mut self, response: RefreshResponse) -> bool {
        if response.generation != self.refresh_generation {
            tracing::debug!(
                response_generation = response.generation,
                current_generation = self.refresh_generation,
                "discarding stale refresh response"
            );
            return false;
        }

        tracing::debug!(
            generation = response.generation,
            result_count = response.listings.len(),
            "refresh response installed"
        );

        self.filtered_tours = response.listings;
        self.loading = false;
        self.selected_index = 0;
        true
    }

    /// Moves selection down by one listing, wrapping to the first at the end.
    ///
    /// No-op if the filtered listing set is empty.
    pub fn move_selection_down(&mut self) {
        if self.filtered_tours.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_tours.len();
    }

    /// Moves selection up by one listing, wrapping to the last at the start.
    ///
    /// No-op if the filtered listing set is empty.
    pub fn move_selection_up(&mut self) {
        if self.filtered_tours.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_tours.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns a reference to the currently selected listing, if any.
    #[must_use]
    pub fn selected_tour(&self) -> Option<&TourListing> {
        self.filtered_tours.get(self.selected_index)
    }

    /// The current page, zero-based, derived from the selection.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.selected_index / self.page_size
    }

    /// Total number of pages for the filtered set. Zero when empty.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.filtered_tours.len().div_ceil(self.page_size)
    }

    /// Jumps selection to the first listing of the next page.
    ///
    /// No-op on the last page (pages do not wrap, matching the disabled
    /// "Next" button at the end of the results).
    pub fn next_page(&mut self) {
        let page = self.current_page();
        if page + 1 < self.total_pages() {
            self.selected_index = (page + 1) * self.page_size;
        }
    }

    /// Jumps selection to the first listing of the previous page.
    ///
    /// No-op on the first page.
    pub fn prev_page(&mut self) {
        let page = self.current_page();
        if page > 0 {
            self.selected_index = (page - 1) * self.page_size;
        }
    }

    /// Advances the category filter: all → beach → ... → nature → all.
    pub fn cycle_category(&mut self) {
        self.category = match self.category {
            None => Some(Category::ALL[0]),
            Some(current) => Category::ALL
                .iter()
                .position(|c| *c == current)
                .and_then(|i| Category::ALL.get(i + 1))
                .copied(),
        };
    }

    /// Steps the category filter backwards: all → nature → ... → beach → all.
    pub fn cycle_category_back(&mut self) {
        self.category = match self.category {
            None => Some(Category::ALL[Category::ALL.len() - 1]),
            Some(current) => {
                let position = Category::ALL.iter().position(|c| *c == current);
                match position {
                    Some(0) | None => None,
                    Some(i) => Some(Category::ALL[i - 1]),
                }
            }
        };
    }

    /// Whether the filters are at their defaults (empty text, no category,
    /// default sort, all-listings view).
    #[must_use]
    pub fn filters_are_default(&self) -> bool {
        self.current_query().is_default() && self.view_mode == ViewMode::All
    }

    /// Restores all filters to their defaults.
    pub fn reset_filters(&mut self) {
        self.query_text.clear();
        self.category = None;
        self.sort = SortOrder::default();
        self.view_mode = ViewMode::All;
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// Transforms application state into a structured representation optimized
    /// for rendering. Handles page slicing, in-page windowing when the
    /// terminal is too short for a full page, search match highlighting, and
    /// the loading/empty/detail display states.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> viewmodel::UiViewModel {
        if self.input_mode == InputMode::Detail {
            if let Some(listing) = self.selected_tour() {
                return viewmodel::UiViewModel {
                    cards: vec![],
                    selected_index: 0,
                    header: self.compute_header(),
                    filter_bar: self.compute_filter_bar(),
                    footer: self.compute_footer(),
                    pagination: None,
                    search_bar: None,
                    loading: None,
                    empty_state: None,
                    detail: Some(Self::compute_detail(listing)),
                };
            }
        }

        if self.loading {
            return viewmodel::UiViewModel {
                cards: vec![],
                selected_index: 0,
                header: self.compute_header(),
                filter_bar: self.compute_filter_bar(),
                footer: self.compute_footer(),
                pagination: None,
                search_bar: self.compute_search_bar(),
                loading: Some(viewmodel::LoadingInfo {
                    message: "Finding your next adventure...".to_string(),
                }),
                empty_state: None,
                detail: None,
            };
        }

        if self.filtered_tours.is_empty() {
            return viewmodel::UiViewModel {
                cards: vec![],
                selected_index: 0,
                header: self.compute_header(),
                filter_bar: self.compute_filter_bar(),
                footer: self.compute_footer(),
                pagination: None,
                search_bar: self.compute_search_bar(),
                loading: None,
                empty_state: Some(viewmodel::EmptyState {
                    message: "No Adventures Found".to_string(),
                    subtitle: "We couldn't find any tours matching your criteria. \
                               Try adjusting your search or filters!"
                        .to_string(),
                }),
                detail: None,
            };
        }

        let page_start = self.current_page() * self.page_size;
        let page_end = (page_start + self.page_size).min(self.filtered_tours.len());
        let selection_in_page = self.selected_index - page_start;

        // Window within the page when the terminal cannot fit page_size cards.
        let slots = (self.calculate_available_rows(rows) / CARD_HEIGHT).max(1);
        let page_len = page_end - page_start;

        let mut visible_start = selection_in_page.saturating_sub(slots / 2);
        let visible_end = (visible_start + slots).min(page_len);
        let actual_count = visible_end - visible_start;
        if actual_count < slots && page_len >= slots {
            visible_start = visible_end.saturating_sub(slots);
        }

        let highlighting =
            matches!(self.input_mode, InputMode::Search(_)) && !self.query_text.is_empty();

        let cards: Vec<viewmodel::CardItem> = self.filtered_tours
            [page_start + visible_start..page_start + visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, listing)| {
                let absolute_idx = page_start + visible_start + relative_idx;
                self.compute_card(listing, absolute_idx, cols, highlighting)
            })
            .collect();

        let selected_display_index = selection_in_page.saturating_sub(visible_start);

        let pagination = if self.total_pages() > 1 {
            Some(viewmodel::PaginationInfo {
                current_page: self.current_page() + 1,
                total_pages: self.total_pages(),
            })
        } else {
            None
        };

        viewmodel::UiViewModel {
            cards,
            selected_index: selected_display_index,
            header: self.compute_header(),
            filter_bar: self.compute_filter_bar(),
            footer: self.compute_footer(),
            pagination,
            search_bar: self.compute_search_bar(),
            loading: None,
            empty_state: None,
            detail: None,
        }
    }

    /// Computes a card for a single listing on the visible page.
    ///
    /// Handles name and description truncation and search match highlighting.
    fn compute_card(
        &self,
        listing: &TourListing,
        absolute_idx: usize,
        cols: usize,
        highlighting: bool,
    ) -> viewmodel::CardItem {
        let name = truncate_text(&listing.name, NAME_DISPLAY_WIDTH);
        let description = truncate_text(&listing.description, cols.saturating_sub(4).max(20));

        let highlight_ranges = if highlighting {
            substring_ranges(&name, &self.query_text)
        } else {
            vec![]
        };

        viewmodel::CardItem {
            name,
            location: listing.location.to_uppercase(),
            category: format!("{} {}", listing.category.icon(), listing.category.label()),
            duration: listing.duration.clone(),
            description,
            price: listing.price_label(),
            rating: listing.rating_label(),
            reviews: format!("({})", listing.reviews),
            featured: listing.featured,
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    /// Computes the full detail view for a listing.
    fn compute_detail(listing: &TourListing) -> viewmodel::DetailView {
        viewmodel::DetailView {
            name: listing.name.clone(),
            location: listing.location.clone(),
            category: format!("{} {}", listing.category.icon(), listing.category.label()),
            description: listing.description.clone(),
            price: listing.price_label(),
            rating: listing.rating_label(),
            reviews: format!("{} reviews", listing.reviews),
            duration: listing.duration.clone(),
            image: listing.image.clone(),
            featured: listing.featured,
        }
    }

    /// Computes header information based on current view mode.
    fn compute_header(&self) -> viewmodel::HeaderInfo {
        let view_name = match self.view_mode {
            ViewMode::All => "Explore All Tours",
            ViewMode::Featured => "Featured Tours",
        };
        let count = self.filtered_tours.len();
        viewmodel::HeaderInfo {
            title: format!(" ✈ Travelink · {view_name} ({count} tours) "),
        }
    }

    /// Computes the category chip row and sort label.
    fn compute_filter_bar(&self) -> viewmodel::FilterBarInfo {
        let mut chips = vec![viewmodel::Chip {
            label: "All".to_string(),
            active: self.category.is_none(),
        }];

        chips.extend(Category::ALL.iter().map(|category| viewmodel::Chip {
            label: format!("{} {}", category.icon(), category.label()),
            active: self.category == Some(*category),
        }));

        viewmodel::FilterBarInfo {
            chips,
            sort_label: self.sort.label().to_string(),
        }
    }

    /// Computes footer keybindings text based on current input mode.
    fn compute_footer(&self) -> viewmodel::FooterInfo {
        use super::modes::SearchFocus;

        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: browse results  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate  Enter: details".to_string()
            }
            InputMode::Detail => "ESC or Enter: back  q: quit".to_string(),
            InputMode::Normal => {
                "j/k: navigate  h/l: pages  /: search  c: category  s: sort  \
                 f: featured  r: reset  Enter: details  q: quit"
                    .to_string()
            }
        };

        viewmodel::FooterInfo { keybindings }
    }

    /// Computes search bar state if in search mode.
    fn compute_search_bar(&self) -> Option<viewmodel::SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(viewmodel::SearchBarInfo {
                query: self.query_text.clone(),
            })
        } else {
            None
        }
    }

    /// Calculates rows available for cards after subtracting UI chrome.
    ///
    /// Accounts for the blank top line, header, borders, filter bar,
    /// pagination, footer, and the search box when active.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Search(_) => total_rows.saturating_sub(12),
            _ => total_rows.saturating_sub(9),
        }
    }
}

/// Truncates text to a maximum number of characters, appending `...`.
fn truncate_text(text: &str, max_chars: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        text.to_string()
    } else {
        let keep = max_chars.saturating_sub(3);
        let mut truncated: String = chars[..keep].iter().collect();
        truncated.push_str("...");
        truncated
    }
}

/// Finds all case-insensitive occurrences of `needle` in `text`.
///
/// Returns `(start, end)` character index ranges, exclusive end, in order.
/// Empty needles produce no ranges.
fn substring_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    if needle.is_empty() {
        return vec![];
    }

    let haystack: Vec<char> = text.to_lowercase().chars().collect();
    let pattern: Vec<char> = needle.to_lowercase().chars().collect();

    if pattern.len() > haystack.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + pattern.len() <= haystack.len() {
        if haystack[i..i + pattern.len()] == pattern[..] {
            ranges.push((i, i + pattern.len()));
            i += pattern.len();
        } else {
            i += 1;
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmbeddedCatalog;

    fn state() -> AppState {
        AppState::new(
            EmbeddedCatalog::listings().unwrap(),
            Theme::default(),
            6,
            Duration::ZERO,
        )
    }

    fn refreshed_state() -> AppState {
        let mut state = state();
        let request = state.begin_refresh();
        let response = crate::worker::process(&request);
        assert!(state.apply_refresh(response));
        state
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut state = state();
        let first = state.begin_refresh();
        let _superseded = crate::worker::process(&first);
        let second = state.begin_refresh();

        let stale = crate::worker::process(&first);
        assert!(!state.apply_refresh(stale));
        assert!(state.loading);
        assert!(state.filtered_tours.is_empty());

        let fresh = crate::worker::process(&second);
        assert!(state.apply_refresh(fresh));
        assert!(!state.loading);
        assert_eq!(state.filtered_tours.len(), 9);
    }

    #[test]
    fn refresh_resets_selection_and_page() {
        let mut state = refreshed_state();
        state.selected_index = 7;
        assert_eq!(state.current_page(), 1);

        let request = state.begin_refresh();
        assert_eq!(state.selected_index, 0);

        let response = crate::worker::process(&request);
        state.apply_refresh(response);
        assert_eq!(state.current_page(), 0);
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = refreshed_state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 8);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn page_navigation_is_clamped() {
        let mut state = refreshed_state();
        assert_eq!(state.total_pages(), 2);

        state.prev_page();
        assert_eq!(state.current_page(), 0);

        state.next_page();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.selected_index, 6);

        state.next_page();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn category_cycle_passes_through_all() {
        let mut state = state();
        assert_eq!(state.category, None);

        for expected in Category::ALL {
            state.cycle_category();
            assert_eq!(state.category, Some(expected));
        }
        state.cycle_category();
        assert_eq!(state.category, None);

        state.cycle_category_back();
        assert_eq!(state.category, Some(Category::Nature));
    }

    #[test]
    fn featured_view_narrows_the_base_set() {
        let mut state = state();
        assert_eq!(state.base_listings().len(), 9);

        state.view_mode = ViewMode::Featured;
        let base = state.base_listings();
        assert_eq!(base.len(), 4);
        assert!(base.iter().all(|listing| listing.featured));
    }

    #[test]
    fn viewmodel_shows_loading_then_cards() {
        let mut state = state();
        let vm = state.compute_viewmodel(30, 100);
        assert!(vm.loading.is_some());
        assert!(vm.cards.is_empty());

        let request = state.begin_refresh();
        state.apply_refresh(crate::worker::process(&request));

        let vm = state.compute_viewmodel(30, 100);
        assert!(vm.loading.is_none());
        assert_eq!(vm.cards.len(), 6);
        assert_eq!(
            vm.pagination,
            Some(viewmodel::PaginationInfo {
                current_page: 1,
                total_pages: 2
            })
        );
    }

    #[test]
    fn viewmodel_reports_empty_results() {
        let mut state = state();
        state.query_text = "atlantis".to_string();
        let request = state.begin_refresh();
        state.apply_refresh(crate::worker::process(&request));

        let vm = state.compute_viewmodel(30, 100);
        assert!(vm.empty_state.is_some());
        assert!(vm.pagination.is_none());
    }

    #[test]
    fn detail_mode_overrides_the_card_list() {
        let mut state = refreshed_state();
        state.input_mode = InputMode::Detail;

        let vm = state.compute_viewmodel(30, 100);
        let detail = vm.detail.unwrap();
        assert!(vm.cards.is_empty());
        assert_eq!(detail.name, state.filtered_tours[0].name);
    }

    #[test]
    fn substring_ranges_find_all_matches() {
        assert_eq!(substring_ranges("Bali Beach", "ba"), vec![(0, 2)]);
        assert_eq!(substring_ranges("banana band", "ban"), vec![(0, 3), (7, 10)]);
        assert_eq!(substring_ranges("Raja Ampat", "xyz"), Vec::<(usize, usize)>::new());
        assert_eq!(substring_ranges("short", ""), Vec::<(usize, usize)>::new());
    }

    #[test]
    fn truncation_respects_character_boundaries() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a very long listing name", 10), "a very ...");
    }
}
