//! Filesystem path utilities.
//!
//! This module resolves the platform data directory used for trace output and
//! handles tilde expansion for user-supplied paths (catalog files, theme
//! files).

use std::path::PathBuf;

/// Returns the data directory for Travelink output.
///
/// Resolves to the platform-local data directory plus a `travelink` segment,
/// e.g. `~/.local/share/travelink` on Linux or
/// `~/Library/Application Support/travelink` on macOS. Falls back to the
/// current directory when the platform directory cannot be determined.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("travelink")
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a tilde prefix are returned unchanged, as are paths on
/// systems where the home directory cannot be determined.
///
/// # Examples
///
/// ```
/// use travelink::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = dirs::home_dir() else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).to_string_lossy().into_owned()
    } else if path == "~" {
        home.to_string_lossy().into_owned()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_app_segment() {
        assert!(data_dir().ends_with("travelink"));
    }

    #[test]
    fn non_tilde_paths_pass_through() {
        assert_eq!(expand_tilde("/tmp/catalog.json"), "/tmp/catalog.json");
        assert_eq!(expand_tilde("relative/path"), "relative/path");
    }

    #[test]
    fn tilde_prefix_is_expanded() {
        if dirs::home_dir().is_some() {
            let expanded = expand_tilde("~/catalog.json");
            assert!(!expanded.starts_with('~'));
            assert!(expanded.ends_with("catalog.json"));
        }
    }
}
