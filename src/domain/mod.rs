//! Domain layer for the Travelink browser.
//!
//! This module contains the core domain types for the catalog, independent of
//! terminal APIs or infrastructure concerns. It keeps the data model and its
//! display conventions isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`listing`]: Tour listing model, categories, and price formatting
//!
//! # Examples
//!
//! ```
//! use travelink::domain::{Category, TourListing};
//!
//! let listing = TourListing {
//!     id: 1,
//!     name: "Bali Beach Hopping Adventure".to_string(),
//!     location: "Bali".to_string(),
//!     description: "Experience the stunning beaches of Bali.".to_string(),
//!     image: String::new(),
//!     price: 1_200_000,
//!     rating: 4.9,
//!     reviews: 128,
//!     duration: "8 hours".to_string(),
//!     category: Category::Beach,
//!     featured: true,
//! };
//! assert_eq!(listing.price_label(), "Rp 1.200.000");
//! ```

pub mod error;
pub mod listing;

pub use error::{Result, TravelinkError};
pub use listing::{format_price, Category, TourListing};
