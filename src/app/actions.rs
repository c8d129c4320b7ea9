//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or refresh
//! responses. Actions bridge pure state transformations and effectful
//! operations like spawning refresh tasks or leaving the terminal UI.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing side effects to be queued atomically. The event loop executes
//! them in sequence.

use crate::worker::RefreshRequest;

/// Commands representing side effects to be executed by the event loop.
///
/// Actions are produced by the event handler and executed by the runtime.
/// They represent the boundary between pure state transformations and
/// effectful operations like task scheduling and shutdown.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Leaves the event loop and restores the terminal.
    ///
    /// Sent when the user explicitly requests to exit (e.g., pressing 'q').
    Quit,

    /// Spawns a background refresh for the given request, aborting any
    /// refresh still in flight.
    ///
    /// The request's generation number lets the handler discard responses
    /// from superseded refreshes even if the abort loses the race.
    ScheduleRefresh(RefreshRequest),
}
