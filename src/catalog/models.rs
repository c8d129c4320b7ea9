//! Raw catalog record types for the load boundary.
//!
//! This module defines the serialized representation of a catalog document.
//! Records keep the category as a plain string so that malformed documents
//! produce a descriptive catalog error instead of a serde type error; the
//! conversion into domain [`TourListing`] values is where invariants are
//! enforced.

use crate::domain::{Category, Result, TourListing, TravelinkError};
use serde::{Deserialize, Serialize};

/// Top-level catalog document format.
///
/// # File format
///
/// ```json
/// {
///   "version": 1,
///   "listings": [
///     {
///       "id": 1,
///       "name": "Bali Beach Hopping Adventure",
///       "location": "Bali",
///       "description": "Experience the stunning beaches of Bali.",
///       "image": "https://example.com/photo.jpg",
///       "price": 1200000,
///       "rating": 4.9,
///       "reviews": 128,
///       "duration": "8 hours",
///       "category": "beach",
///       "featured": true
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Version of the catalog format for future migrations.
    pub version: u32,

    /// All listings in catalog order. Order is significant: it is the
    /// tie-break order for every sort the browser applies.
    #[serde(default)]
    pub listings: Vec<ListingRecord>,
}

/// A single serialized listing, not yet validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price: u64,
    pub rating: f32,
    pub reviews: u32,
    pub duration: String,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
}

impl ListingRecord {
    /// Validates the record and converts it into a domain listing.
    ///
    /// # Errors
    ///
    /// Returns a catalog error if the rating is outside `[0.0, 5.0]` or the
    /// category is not one of the known classifications.
    pub fn into_listing(self) -> Result<TourListing> {
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(TravelinkError::Catalog(format!(
                "listing {} ({}): rating {} outside [0, 5]",
                self.id, self.name, self.rating
            )));
        }

        let category = Category::from_name(&self.category).ok_or_else(|| {
            TravelinkError::Catalog(format!(
                "listing {} ({}): unknown category {:?}",
                self.id, self.name, self.category
            ))
        })?;

        Ok(TourListing {
            id: self.id,
            name: self.name,
            location: self.location,
            description: self.description,
            image: self.image,
            price: self.price,
            rating: self.rating,
            reviews: self.reviews,
            duration: self.duration,
            category,
            featured: self.featured,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ListingRecord {
        ListingRecord {
            id: 7,
            name: "Orangutan Jungle Trek".to_string(),
            location: "Sumatra".to_string(),
            description: "Trek through the Sumatran jungle.".to_string(),
            image: String::new(),
            price: 2_200_000,
            rating: 4.9,
            reviews: 112,
            duration: "3 days".to_string(),
            category: "nature".to_string(),
            featured: false,
        }
    }

    #[test]
    fn valid_record_converts() {
        let listing = record().into_listing().unwrap();
        assert_eq!(listing.category, Category::Nature);
        assert_eq!(listing.price, 2_200_000);
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let mut bad = record();
        bad.rating = 5.1;
        let err = bad.into_listing().unwrap_err();
        assert!(matches!(err, TravelinkError::Catalog(_)));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut bad = record();
        bad.category = "safari".to_string();
        let err = bad.into_listing().unwrap_err();
        assert!(err.to_string().contains("safari"));
    }
}
