//! Error types for the Travelink browser.
//!
//! This module defines the centralized error type [`TravelinkError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Travelink operations.
///
/// This enum consolidates all error conditions that can occur while running the
/// browser, from catalog loading to I/O failures and configuration issues. Most
/// variants wrap underlying errors from external crates using `#[from]` for
/// automatic conversion.
///
/// # Examples
///
/// ```
/// use travelink::domain::TravelinkError;
///
/// fn validate_config() -> Result<(), TravelinkError> {
///     Err(TravelinkError::Config("missing catalog path".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum TravelinkError {
    /// Catalog loading or validation failed.
    ///
    /// Occurs when a catalog document cannot be parsed, or when a listing
    /// record violates an invariant (rating out of range, unknown category,
    /// duplicate id). The string describes what went wrong.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a color theme cannot be parsed from its TOML source.
    /// The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A background refresh task failed or could not be scheduled.
    ///
    /// The refresh computation itself has no failure paths, so in practice this
    /// only surfaces when the response channel is closed mid-shutdown.
    #[error("Refresh error: {0}")]
    Refresh(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Travelink operations.
///
/// This is a type alias for `std::result::Result<T, TravelinkError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, TravelinkError>;
