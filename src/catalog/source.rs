//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over where
//! tour listings come from, plus the [`EmbeddedCatalog`] source that ships the
//! default dataset inside the binary.
//!
//! # Design Philosophy
//!
//! A catalog is loaded exactly once at startup and immutable afterwards, so
//! the trait has a single operation. Validation happens here, at the load
//! boundary: everything downstream can rely on listings being well-formed.

use crate::catalog::models::CatalogDocument;
use crate::domain::{Result, TourListing, TravelinkError};
use std::collections::HashSet;

/// Default catalog shipped with the binary.
const EMBEDDED_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// Abstraction over catalog origins.
///
/// # Implementations
///
/// - [`EmbeddedCatalog`]: the built-in sample dataset (default)
/// - [`JsonCatalog`](crate::catalog::JsonCatalog): a catalog document on disk
pub trait CatalogSource {
    /// Loads and validates all listings, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying document cannot be read or parsed,
    /// or if any listing violates a catalog invariant.
    fn load(&self) -> Result<Vec<TourListing>>;
}

/// Validates a parsed document and converts it into domain listings.
///
/// Checks id uniqueness across the document and delegates per-listing
/// validation to the record conversion. Catalog order is preserved.
pub(crate) fn listings_from_document(document: CatalogDocument) -> Result<Vec<TourListing>> {
    let mut seen_ids = HashSet::new();
    let mut listings = Vec::with_capacity(document.listings.len());

    for record in document.listings {
        if !seen_ids.insert(record.id) {
            return Err(TravelinkError::Catalog(format!(
                "duplicate listing id {}",
                record.id
            )));
        }
        listings.push(record.into_listing()?);
    }

    tracing::debug!(
        version = document.version,
        listing_count = listings.len(),
        "catalog document validated"
    );

    Ok(listings)
}

/// The sample catalog compiled into the binary.
///
/// Used when no catalog file is configured. The dataset is the Travelink
/// sample set of nine Indonesian tours.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    /// Convenience accessor for the embedded listings.
    ///
    /// # Errors
    ///
    /// Returns an error only if the compiled-in document is malformed, which
    /// the catalog tests rule out.
    pub fn listings() -> Result<Vec<TourListing>> {
        Self.load()
    }
}

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<Vec<TourListing>> {
        let _span = tracing::debug_span!("embedded_catalog_load").entered();

        let document: CatalogDocument = serde_json::from_str(EMBEDDED_CATALOG_JSON)
            .map_err(|e| TravelinkError::Catalog(format!("embedded catalog: {e}")))?;

        listings_from_document(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::ListingRecord;
    use crate::domain::Category;

    #[test]
    fn embedded_catalog_parses_and_validates() {
        let listings = EmbeddedCatalog::listings().unwrap();
        assert_eq!(listings.len(), 9);
        assert!(listings.iter().all(|l| (0.0..=5.0).contains(&l.rating)));
    }

    #[test]
    fn embedded_catalog_contains_the_sample_tours() {
        let listings = EmbeddedCatalog::listings().unwrap();

        let bali = listings.iter().find(|l| l.id == 1).unwrap();
        assert_eq!(bali.name, "Bali Beach Hopping Adventure");
        assert_eq!(bali.category, Category::Beach);

        let raja_ampat = listings.iter().find(|l| l.id == 5).unwrap();
        assert_eq!(raja_ampat.location, "Papua");
        assert_eq!(raja_ampat.category, Category::Diving);
        assert_eq!(raja_ampat.price, 3_200_000);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let record = ListingRecord {
            id: 1,
            name: "Tour".to_string(),
            location: "Bali".to_string(),
            description: String::new(),
            image: String::new(),
            price: 100,
            rating: 4.0,
            reviews: 1,
            duration: "1 day".to_string(),
            category: "beach".to_string(),
            featured: false,
        };
        let document = CatalogDocument {
            version: 1,
            listings: vec![record.clone(), record],
        };

        let err = listings_from_document(document).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }
}
