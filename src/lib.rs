//! Travelink: a terminal browser for tour listings.
//!
//! Travelink is a keyboard-driven catalog browser that provides:
//! - Free-text search over tour names, descriptions, and locations
//! - Category filtering across the six tour classifications
//! - Price and rating sort orders with stable tie-breaking
//! - Paginated card display with a featured-only view
//! - Simulated-latency result refreshes with a visible loading state
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Runtime (main.rs)                         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Sources     │   │ - Async       │
//! │ - Theming     │   │ - Validation  │   │   refresh     │
//! │ - Components  │   │ - Filter/sort │   │ - Generations │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Listing model (domain/listing)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Listing sources and the filter/sort pipeline
//! - [`domain`]: Core domain types (listings, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`worker`]: Background refresh task with generation tracking
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Refresh Flow
//!
//! Filter changes never recompute results inline. The handler returns a
//! `ScheduleRefresh` action carrying a generation-tagged request; the runtime
//! aborts any in-flight refresh task and spawns a new one, which sleeps out
//! the configured artificial latency, runs the pure filter pipeline, and
//! sends the result back. Responses from superseded generations are
//! discarded, so rapid typing can never surface stale results.
//!
//! # Examples
//!
//! ```
//! use travelink::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//!
//! // The initial refresh produced by startup:
//! let request = state.begin_refresh();
//! let response = travelink::worker::process(&request);
//! handle_event(&mut state, &Event::RefreshComplete(response))?;
//!
//! assert_eq!(state.filtered_tours.len(), 9);
//! # Ok::<(), travelink::TravelinkError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus, ViewMode};
pub use catalog::{filter_and_sort, SortOrder, TourQuery};
pub use domain::{Category, Result, TourListing, TravelinkError};
pub use ui::Theme;

use catalog::{CatalogSource, EmbeddedCatalog, JsonCatalog};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default artificial latency applied to every refresh, in milliseconds.
pub const DEFAULT_REFRESH_DELAY_MS: u64 = 300;

/// Default number of cards per result page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Application configuration.
///
/// Values come from an optional TOML config file with command-line flags
/// layered on top (flags win). Everything has a default, so an empty
/// configuration is valid.
///
/// # Config file format
///
/// ```toml
/// catalog = "~/tours.json"
/// theme = "catppuccin-latte"
/// trace_level = "debug"
/// refresh_delay_ms = 300
/// page_size = 6
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to a catalog JSON document. `None` uses the embedded samples.
    #[serde(rename = "catalog")]
    pub catalog_path: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Artificial latency applied to every refresh, in milliseconds.
    pub refresh_delay_ms: u64,

    /// Cards per result page.
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            refresh_delay_ms: DEFAULT_REFRESH_DELAY_MS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)?;

        toml::from_str(&contents).map_err(|e| {
            TravelinkError::Config(format!("{}: {e}", path.as_ref().display()))
        })
    }

    /// The refresh delay as a duration.
    #[must_use]
    pub const fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }
}

/// Initializes the application state from configuration.
///
/// Loads the catalog (embedded samples or the configured file) and the theme
/// (file, name, or default), then builds an [`AppState`] ready for event
/// processing. The state starts in the loading display; the caller schedules
/// the initial refresh via [`AppState::begin_refresh`].
///
/// A theme that fails to load falls back to the default with a logged note;
/// a catalog that fails to load is a fatal error, since there would be
/// nothing to browse.
///
/// # Errors
///
/// Returns an error if the configured catalog file cannot be loaded or
/// fails validation.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing travelink");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    let catalog = match &config.catalog_path {
        Some(path) => {
            let expanded = infrastructure::expand_tilde(path);
            tracing::debug!(path = %expanded, "loading catalog file");
            JsonCatalog::new(PathBuf::from(expanded)).load()?
        }
        None => EmbeddedCatalog.load()?,
    };

    tracing::debug!(listing_count = catalog.len(), "catalog loaded");

    Ok(AppState::new(
        catalog,
        theme,
        config.page_size,
        config.refresh_delay(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_initializes_with_embedded_catalog() {
        let state = initialize(&Config::default()).unwrap();
        assert_eq!(state.catalog.len(), 9);
        assert!(state.loading);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(state.refresh_delay, Duration::from_millis(300));
    }

    #[test]
    fn config_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "theme = \"catppuccin-latte\"\nrefresh_delay_ms = 50\npage_size = 3\n"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.refresh_delay_ms, 50);
        assert_eq!(config.page_size, 3);
        assert_eq!(config.catalog_path, None);

        let state = initialize(&config).unwrap();
        assert_eq!(state.theme.name, "catppuccin-latte");
        assert_eq!(state.page_size, 3);
    }

    #[test]
    fn malformed_config_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "page_size = \"six\"").unwrap();

        assert!(matches!(
            Config::from_file(file.path()),
            Err(TravelinkError::Config(_))
        ));
    }

    #[test]
    fn missing_catalog_file_is_fatal() {
        let config = Config {
            catalog_path: Some("/no/such/catalog.json".to_string()),
            ..Config::default()
        };
        assert!(initialize(&config).is_err());
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("nonexistent".to_string()),
            ..Config::default()
        };
        let state = initialize(&config).unwrap();
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
