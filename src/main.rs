//! Terminal runtime and entry point.
//!
//! This module provides the thin integration layer between the Travelink
//! library and the terminal: argument parsing, tracing setup, raw-mode
//! management, keyboard mapping, and the event loop that executes actions.
//!
//! # Runtime Lifecycle
//!
//! 1. **Startup**: Parse flags, merge the optional config file, initialize
//!    tracing, load catalog and theme
//! 2. **Terminal Setup**: Enter the alternate screen, enable raw mode, hide
//!    the cursor (restored on exit by a guard)
//! 3. **Initial Refresh**: Schedule the first result computation so the
//!    loading state shows immediately
//! 4. **Event Loop**: Poll keyboard input, drain refresh responses, delegate
//!    to the library event handler, execute resulting actions
//! 5. **Shutdown**: Drop the guard, restoring the terminal
//!
//! # Refresh Scheduling
//!
//! `Action::ScheduleRefresh` aborts the previously spawned refresh task (if
//! any) before spawning the new one, so at most one refresh is in flight.
//! Responses travel over an mpsc channel drained at the top of each loop
//! iteration; the library's generation check then drops anything stale that
//! slipped through before the abort landed.
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+C`: Quit
//! - `Ctrl+n`/`Ctrl+p`: Move down/up
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `h`/`Left`, `l`/`Right`: Previous/next page
//! - `Enter`: Open listing details
//! - `/`: Enter search mode
//! - `c`/`C`: Cycle category filter forwards/backwards
//! - `s`: Cycle sort order
//! - `f`: Toggle the featured-only view
//! - `r`: Reset all filters
//! - `q`: Quit
//!
//! In search mode:
//! - typing: edit the query (each keystroke schedules a refresh)
//! - `Enter`: move focus to the results, then open details
//! - `Esc`: exit search
//! - `/`: return to the query input

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::execute;
use std::io::{stdout, Write};
use std::sync::mpsc;
use std::time::Duration;

use travelink::worker::RefreshResponse;
use travelink::{
    handle_event, initialize, Action, AppState, Config, Event, InputMode, SearchFocus,
};

/// How long one loop iteration waits for a keyboard event before checking
/// the refresh channel again.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "travelink", about = "Browse Travelink tour listings in the terminal")]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<String>,

    /// Path to a catalog JSON document (defaults to the built-in samples)
    #[arg(long)]
    catalog: Option<String>,

    /// Built-in theme name (catppuccin-mocha, catppuccin-latte)
    #[arg(long)]
    theme: Option<String>,

    /// Path to a custom TOML theme file
    #[arg(long)]
    theme_file: Option<String>,

    /// Tracing level (trace, debug, info, warn, error)
    #[arg(long)]
    trace_level: Option<String>,

    /// Artificial refresh latency in milliseconds
    #[arg(long)]
    refresh_delay_ms: Option<u64>,

    /// Cards per result page
    #[arg(long)]
    page_size: Option<usize>,
}

impl Args {
    /// Merges command-line flags over a base configuration (flags win).
    fn merge_into(self, mut config: Config) -> Config {
        if self.catalog.is_some() {
            config.catalog_path = self.catalog;
        }
        if self.theme.is_some() {
            config.theme_name = self.theme;
        }
        if self.theme_file.is_some() {
            config.theme_file = self.theme_file;
        }
        if self.trace_level.is_some() {
            config.trace_level = self.trace_level;
        }
        if let Some(delay) = self.refresh_delay_ms {
            config.refresh_delay_ms = delay;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        config
    }
}

/// Restores the terminal on drop, including on panic unwind.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> std::io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}

#[tokio::main]
async fn main() -> travelink::Result<()> {
    let args = Args::parse();

    let base = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let config = args.merge_into(base);

    travelink::observability::init_tracing(&config);

    let span = tracing::debug_span!("startup");
    let state = {
        let _guard = span.entered();
        initialize(&config)?
    };

    run(state)
}

/// Runs the event loop until the user quits.
fn run(mut state: AppState) -> travelink::Result<()> {
    let _terminal_guard = TerminalGuard::new()?;

    // Channel for responses from refresh tasks.
    let (tx, rx) = mpsc::channel::<RefreshResponse>();

    // Abort handle of the refresh currently in flight.
    let mut active_refresh: Option<tokio::task::AbortHandle> = None;

    // Show the loading state immediately.
    schedule_refresh(state.begin_refresh(), &mut active_refresh, &tx);

    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            draw(&state)?;
            needs_redraw = false;
        }

        // Refresh responses take priority over new input.
        while let Ok(response) = rx.try_recv() {
            let (rendered, actions) =
                handle_event(&mut state, &Event::RefreshComplete(response))?;
            needs_redraw |= rendered;
            if execute_actions(actions, &mut active_refresh, &tx) {
                return Ok(());
            }
        }

        if !crossterm::event::poll(POLL_TIMEOUT)? {
            continue;
        }

        let event = match crossterm::event::read()? {
            crossterm::event::Event::Key(key) => match map_key_event(&state, &key) {
                Some(event) => event,
                None => continue,
            },
            crossterm::event::Event::Resize(_, _) => {
                needs_redraw = true;
                continue;
            }
            _ => continue,
        };

        let (rendered, actions) = handle_event(&mut state, &event)?;
        needs_redraw |= rendered;

        if execute_actions(actions, &mut active_refresh, &tx) {
            return Ok(());
        }
    }
}

/// Clears the screen and renders the current state.
fn draw(state: &AppState) -> std::io::Result<()> {
    let (cols, rows) = crossterm::terminal::size()?;
    execute!(stdout(), Clear(ClearType::All))?;
    travelink::ui::render(state, rows as usize, cols as usize);
    stdout().flush()
}

/// Executes the actions returned by the event handler.
///
/// Returns `true` when the loop should terminate.
fn execute_actions(
    actions: Vec<Action>,
    active_refresh: &mut Option<tokio::task::AbortHandle>,
    tx: &mpsc::Sender<RefreshResponse>,
) -> bool {
    for action in actions {
        match action {
            Action::Quit => {
                tracing::debug!("quit requested");
                return true;
            }
            Action::ScheduleRefresh(request) => {
                schedule_refresh(request, active_refresh, tx);
            }
        }
    }
    false
}

/// Aborts any in-flight refresh and spawns a task for the new request.
fn schedule_refresh(
    request: travelink::worker::RefreshRequest,
    active_refresh: &mut Option<tokio::task::AbortHandle>,
    tx: &mpsc::Sender<RefreshResponse>,
) {
    if let Some(handle) = active_refresh.take() {
        tracing::debug!("aborting superseded refresh");
        handle.abort();
    }

    tracing::debug!(generation = request.generation, "spawning refresh task");
    let task = tokio::spawn(travelink::worker::run(request, tx.clone()));
    *active_refresh = Some(task.abort_handle());
}

/// Maps keyboard events to application events based on the current mode.
fn map_key_event(state: &AppState, key: &KeyEvent) -> Option<Event> {
    tracing::trace!(code = ?key.code, modifiers = ?key.modifiers, "key event");

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Event::Quit),
            KeyCode::Char('n') => Some(Event::KeyDown),
            KeyCode::Char('p') => Some(Event::KeyUp),
            _ => None,
        };
    }

    match state.input_mode {
        InputMode::Normal => map_normal_key(key.code),
        InputMode::Detail => map_detail_key(key.code),
        InputMode::Search(SearchFocus::Typing) => map_search_typing_key(key.code),
        InputMode::Search(SearchFocus::Navigating) => map_search_navigating_key(key.code),
    }
}

fn map_normal_key(code: KeyCode) -> Option<Event> {
    Some(match code {
        KeyCode::Down | KeyCode::Char('j') => Event::KeyDown,
        KeyCode::Up | KeyCode::Char('k') => Event::KeyUp,
        KeyCode::Left | KeyCode::Char('h') => Event::PrevPage,
        KeyCode::Right | KeyCode::Char('l') => Event::NextPage,
        KeyCode::Enter => Event::OpenDetail,
        KeyCode::Char('/') => Event::SearchMode,
        KeyCode::Char('c') => Event::CycleCategory,
        KeyCode::Char('C') => Event::CycleCategoryBack,
        KeyCode::Char('s') => Event::CycleSort,
        KeyCode::Char('f') => Event::ToggleFeatured,
        KeyCode::Char('r') => Event::ResetFilters,
        KeyCode::Char('q') => Event::Quit,
        KeyCode::Esc => Event::Escape,
        _ => return None,
    })
}

fn map_detail_key(code: KeyCode) -> Option<Event> {
    Some(match code {
        KeyCode::Esc | KeyCode::Enter => Event::CloseDetail,
        KeyCode::Char('q') => Event::Quit,
        _ => return None,
    })
}

fn map_search_typing_key(code: KeyCode) -> Option<Event> {
    Some(match code {
        KeyCode::Esc => Event::ExitSearch,
        KeyCode::Enter => Event::FocusResults,
        KeyCode::Backspace => Event::Backspace,
        KeyCode::Char(c) => Event::Char(c),
        _ => return None,
    })
}

fn map_search_navigating_key(code: KeyCode) -> Option<Event> {
    Some(match code {
        KeyCode::Esc => Event::ExitSearch,
        KeyCode::Char('/') => Event::FocusSearchBar,
        KeyCode::Down | KeyCode::Char('j') => Event::KeyDown,
        KeyCode::Up | KeyCode::Char('k') => Event::KeyUp,
        KeyCode::Left | KeyCode::Char('h') => Event::PrevPage,
        KeyCode::Right | KeyCode::Char('l') => Event::NextPage,
        KeyCode::Enter => Event::OpenDetail,
        KeyCode::Char('q') => Event::Quit,
        _ => return None,
    })
}
