//! Input and view mode state types for the application.
//!
//! This module defines the state machine enums that control user interaction
//! modes and view filtering. These types determine which keybindings are active,
//! how input is processed, and which listings form the base set before the
//! search filter runs.

/// Focus state within search mode.
///
/// Determines whether search input is being typed or search results are being
/// navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered search results.
    ///
    /// Accepts j/k for movement, enter to open details, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), h/l (pages), / (search),
    /// enter (details), c (category), s (sort), f (featured), r (reset),
    /// q (quit).
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is typing
    /// or navigating results. Footer displays search-specific keybindings.
    Search(SearchFocus),

    /// Full detail view of the selected listing.
    ///
    /// Esc or enter returns to normal mode.
    Detail,
}

/// View filtering mode determining the base listing set.
///
/// Applied before the search filter runs. Changes the header title and the
/// set of listings any query can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Every listing in the catalog.
    All,

    /// Only listings flagged as featured.
    Featured,
}

impl ViewMode {
    /// The other view mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::All => Self::Featured,
            Self::Featured => Self::All,
        }
    }
}
