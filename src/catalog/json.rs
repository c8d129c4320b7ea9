//! JSON file catalog source.
//!
//! Loads a catalog document from disk, for users who want to browse their own
//! listing set instead of the embedded samples. The file is read once at
//! startup; the browser never writes it back.

use crate::catalog::models::CatalogDocument;
use crate::catalog::source::{listings_from_document, CatalogSource};
use crate::domain::{Result, TourListing, TravelinkError};
use std::path::PathBuf;

/// Catalog backed by a JSON document on disk.
///
/// See [`CatalogDocument`] for the expected file format.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    /// Path to the catalog document.
    file_path: PathBuf,
}

impl JsonCatalog {
    /// Creates a source for the given catalog file.
    ///
    /// The file is not touched until [`CatalogSource::load`] is called.
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

impl CatalogSource for JsonCatalog {
    fn load(&self) -> Result<Vec<TourListing>> {
        let _span =
            tracing::debug_span!("json_catalog_load", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let document: CatalogDocument = serde_json::from_str(&contents).map_err(|e| {
            TravelinkError::Catalog(format!("{}: {e}", self.file_path.display()))
        })?;

        tracing::debug!(
            version = document.version,
            listing_count = document.listings.len(),
            "catalog file parsed"
        );

        listings_from_document(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_a_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "version": 1,
                "listings": [{{
                    "id": 42,
                    "name": "Gili Islands Snorkeling Trip",
                    "location": "Lombok",
                    "description": "Snorkel in crystal clear waters.",
                    "price": 750000,
                    "rating": 4.7,
                    "reviews": 85,
                    "duration": "7 hours",
                    "category": "diving"
                }}]
            }}"#
        )
        .unwrap();

        let listings = JsonCatalog::new(file.path().to_path_buf()).load().unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, 42);
        assert!(!listings[0].featured);
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = JsonCatalog::new(PathBuf::from("/definitely/not/here.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, TravelinkError::Io(_)));
    }

    #[test]
    fn invalid_json_reports_catalog_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let err = JsonCatalog::new(file.path().to_path_buf()).load().unwrap_err();
        assert!(matches!(err, TravelinkError::Catalog(_)));
    }
}
