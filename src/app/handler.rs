//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and refresh responses, translating them into state changes and action
//! sequences. It serves as the primary control flow coordinator for the
//! application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal runtime or the refresh task
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Filter-changing events never recompute results inline. They obtain a
//! refresh request from the state and return it as a
//! [`Action::ScheduleRefresh`]; the runtime aborts any in-flight refresh and
//! spawns the new one. Results come back as [`Event::RefreshComplete`] and
//! are installed only if their generation is still current.
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `KeyDown`, `KeyUp`, `NextPage`, `PrevPage`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Mode Switching**: `SearchMode`, `OpenDetail`, `CloseDetail`
//! - **Filters**: `CycleCategory`, `CycleSort`, `ToggleFeatured`, `ResetFilters`
//! - **System**: `RefreshComplete`, `Quit`

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::RefreshResponse;

/// Events triggered by user input or refresh completion.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves selection down by one listing (wraps to the first).
    KeyDown,
    /// Moves selection up by one listing (wraps to the last).
    KeyUp,
    /// Jumps to the next result page (clamped at the last page).
    NextPage,
    /// Jumps to the previous result page (clamped at the first page).
    PrevPage,
    /// Leaves the application.
    Quit,
    /// Opens the detail view for the selected listing.
    OpenDetail,
    /// Closes the detail view.
    CloseDetail,
    /// Enters search mode with typing focus, clearing any previous query.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the search results list (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears transient state and returns to normal mode.
    Escape,

    /// Advances the category filter to the next category (or back to all).
    CycleCategory,
    /// Steps the category filter backwards.
    CycleCategoryBack,
    /// Advances the sort order (rating → price-low → price-high).
    CycleSort,
    /// Toggles between the all-listings and featured-only views.
    ToggleFeatured,
    /// Restores all filters to their defaults.
    ResetFilters,

    /// Delivers the outcome of a background refresh.
    ///
    /// Installed only if the response generation matches the most recently
    /// scheduled refresh; stale responses are discarded without rendering.
    RefreshComplete(RefreshResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions to be executed by the event loop.
///
/// # Returns
///
/// A tuple of (should re-render, actions to execute). The action list may be
/// empty if the event requires no side effects.
///
/// # Errors
///
/// Currently infallible; the `Result` return keeps the signature stable for
/// handlers that may need to propagate errors.
#[allow(clippy::too_many_lines, clippy::unnecessary_wraps)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::NextPage => {
            state.next_page();
            Ok((true, vec![]))
        }
        Event::PrevPage => {
            state.prev_page();
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::OpenDetail => {
            use super::modes::InputMode;

            if state.selected_tour().is_none() {
                tracing::debug!("no listing selected");
                if matches!(state.input_mode, InputMode::Search(_)) {
                    tracing::debug!("exiting search mode (no selection)");
                    return Ok(exit_search(state));
                }
                return Ok((false, vec![]));
            }

            tracing::debug!(
                listing = %state.selected_tour().map(|t| t.name.as_str()).unwrap_or_default(),
                "opening detail view"
            );
            state.input_mode = InputMode::Detail;
            Ok((true, vec![]))
        }
        Event::CloseDetail => {
            use super::modes::InputMode;
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            use super::modes::{InputMode, SearchFocus};
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);

            let had_query = !state.query_text.is_empty();
            state.query_text = String::new();

            let actions = if had_query {
                vec![Action::ScheduleRefresh(state.begin_refresh())]
            } else {
                vec![]
            };
            Ok((true, actions))
        }
        Event::FocusSearchBar => {
            use super::modes::{InputMode, SearchFocus};
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            use super::modes::{InputMode, SearchFocus};

            if state.query_text.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.query_text, "exiting search mode");
            Ok(exit_search(state))
        }
        Event::Char(c) => {
            use super::modes::InputMode;

            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.query_text.push(*c);

            tracing::trace!(query = %state.query_text, char = %c, "search query updated");

            Ok((true, vec![Action::ScheduleRefresh(state.begin_refresh())]))
        }
        Event::Backspace => {
            use super::modes::InputMode;
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            if state.query_text.pop().is_none() {
                return Ok((false, vec![]));
            }

            Ok((true, vec![Action::ScheduleRefresh(state.begin_refresh())]))
        }
        Event::Escape => {
            use super::modes::InputMode;

            if state.input_mode == InputMode::Detail {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }

            Ok(exit_search(state))
        }
        Event::CycleCategory => {
            state.cycle_category();
            Ok((true, vec![Action::ScheduleRefresh(state.begin_refresh())]))
        }
        Event::CycleCategoryBack => {
            state.cycle_category_back();
            Ok((true, vec![Action::ScheduleRefresh(state.begin_refresh())]))
        }
        Event::CycleSort => {
            state.sort = state.sort.next();
            Ok((true, vec![Action::ScheduleRefresh(state.begin_refresh())]))
        }
        Event::ToggleFeatured => {
            state.view_mode = state.view_mode.toggled();
            tracing::debug!(view_mode = ?state.view_mode, "view mode toggled");
            Ok((true, vec![Action::ScheduleRefresh(state.begin_refresh())]))
        }
        Event::ResetFilters => {
            if state.filters_are_default() {
                tracing::debug!("filters already default, skipping reset");
                return Ok((false, vec![]));
            }

            tracing::debug!("resetting filters");
            state.reset_filters();
            Ok((true, vec![Action::ScheduleRefresh(state.begin_refresh())]))
        }
        Event::RefreshComplete(response) => {
            let changed = state.apply_refresh(response.clone());
            Ok((changed, vec![]))
        }
    }
}

/// Leaves search mode, clearing the query and refreshing if it was non-empty.
fn exit_search(state: &mut AppState) -> (bool, Vec<Action>) {
    use super::modes::InputMode;

    state.input_mode = InputMode::Normal;

    let had_query = !state.query_text.is_empty();
    state.query_text = String::new();

    if had_query {
        (true, vec![Action::ScheduleRefresh(state.begin_refresh())])
    } else {
        (true, vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{InputMode, SearchFocus, ViewMode};
    use crate::catalog::{EmbeddedCatalog, SortOrder};
    use crate::domain::Category;
    use crate::ui::theme::Theme;
    use crate::worker::process;
    use std::time::Duration;

    fn ready_state() -> AppState {
        let mut state = AppState::new(
            EmbeddedCatalog::listings().unwrap(),
            Theme::default(),
            6,
            Duration::ZERO,
        );
        let request = state.begin_refresh();
        state.apply_refresh(process(&request));
        state
    }

    fn refresh_request(actions: &[Action]) -> &crate::worker::RefreshRequest {
        match actions {
            [Action::ScheduleRefresh(request)] => request,
            other => panic!("expected a single ScheduleRefresh, got {other:?}"),
        }
    }

    #[test]
    fn typing_schedules_a_refresh_per_keystroke() {
        let mut state = ready_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Char('b')).unwrap();
        let first = refresh_request(&actions).generation;

        let (_, actions) = handle_event(&mut state, &Event::Char('a')).unwrap();
        let second = refresh_request(&actions);

        assert_eq!(second.generation, first + 1);
        assert_eq!(second.query.text, "ba");
        assert!(state.loading);
    }

    #[test]
    fn stale_refresh_response_does_not_render() {
        let mut state = ready_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Char('b')).unwrap();
        let superseded = process(refresh_request(&actions));

        let (_, actions) = handle_event(&mut state, &Event::Char('a')).unwrap();
        let current = process(refresh_request(&actions));

        let (rendered, _) =
            handle_event(&mut state, &Event::RefreshComplete(superseded)).unwrap();
        assert!(!rendered);
        assert!(state.loading);

        let (rendered, _) = handle_event(&mut state, &Event::RefreshComplete(current)).unwrap();
        assert!(rendered);
        assert!(!state.loading);
        assert_eq!(state.filtered_tours.len(), 1);
        assert_eq!(state.filtered_tours[0].name, "Bali Beach Hopping Adventure");
    }

    #[test]
    fn characters_outside_search_mode_are_ignored() {
        let mut state = ready_state();
        let (rendered, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
        assert!(state.query_text.is_empty());
    }

    #[test]
    fn backspace_on_empty_query_schedules_nothing() {
        let mut state = ready_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();

        let (rendered, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
    }

    #[test]
    fn category_cycling_filters_the_request() {
        let mut state = ready_state();
        let (_, actions) = handle_event(&mut state, &Event::CycleCategory).unwrap();
        assert_eq!(refresh_request(&actions).query.category, Some(Category::Beach));
    }

    #[test]
    fn sort_cycling_advances_the_order() {
        let mut state = ready_state();
        let (_, actions) = handle_event(&mut state, &Event::CycleSort).unwrap();
        assert_eq!(
            refresh_request(&actions).query.sort,
            SortOrder::PriceLowToHigh
        );
    }

    #[test]
    fn featured_toggle_narrows_the_request_base() {
        let mut state = ready_state();
        let (_, actions) = handle_event(&mut state, &Event::ToggleFeatured).unwrap();

        let request = refresh_request(&actions);
        assert_eq!(request.base.len(), 4);
        assert!(request.base.iter().all(|listing| listing.featured));
        assert_eq!(state.view_mode, ViewMode::Featured);
    }

    #[test]
    fn reset_is_a_no_op_when_filters_are_default() {
        let mut state = ready_state();
        let (rendered, actions) = handle_event(&mut state, &Event::ResetFilters).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
    }

    #[test]
    fn reset_restores_defaults_and_refreshes() {
        let mut state = ready_state();
        handle_event(&mut state, &Event::CycleCategory).unwrap();
        handle_event(&mut state, &Event::CycleSort).unwrap();

        let (rendered, actions) = handle_event(&mut state, &Event::ResetFilters).unwrap();
        assert!(rendered);

        let request = refresh_request(&actions);
        assert!(request.query.text.is_empty());
        assert_eq!(request.query.category, None);
        assert_eq!(request.query.sort, SortOrder::Rating);
    }

    #[test]
    fn quit_emits_the_quit_action() {
        let mut state = ready_state();
        let (rendered, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert!(!rendered);
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn detail_opens_and_closes() {
        let mut state = ready_state();

        handle_event(&mut state, &Event::OpenDetail).unwrap();
        assert_eq!(state.input_mode, InputMode::Detail);

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn enter_with_no_results_leaves_search_mode() {
        let mut state = ready_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "atlantis".chars() {
            let (_, actions) = handle_event(&mut state, &Event::Char(c)).unwrap();
            let response = process(refresh_request(&actions));
            handle_event(&mut state, &Event::RefreshComplete(response)).unwrap();
        }
        assert!(state.filtered_tours.is_empty());

        let (_, actions) = handle_event(&mut state, &Event::OpenDetail).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.query_text.is_empty());
        // Clearing the query re-runs the unfiltered search.
        assert_eq!(refresh_request(&actions).query.text, "");
    }

    #[test]
    fn search_focus_round_trip() {
        let mut state = ready_state();

        handle_event(&mut state, &Event::SearchMode).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Typing));

        handle_event(&mut state, &Event::Char('b')).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));

        handle_event(&mut state, &Event::FocusSearchBar).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Typing));

        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.query_text.is_empty());
    }

    #[test]
    fn focus_results_with_empty_query_returns_to_normal() {
        let mut state = ready_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
    }
}
