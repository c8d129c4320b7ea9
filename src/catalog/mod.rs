//! Catalog layer: listing sources and the filter/sort pipeline.
//!
//! This module owns everything between raw catalog documents and the ordered
//! listing sets the UI renders. Catalogs are loaded and validated once at
//! startup; afterwards the only operation is the pure [`filter_and_sort`]
//! pipeline over the in-memory set.
//!
//! # Modules
//!
//! - `source`: the [`CatalogSource`] trait and the embedded default dataset
//! - `json`: catalog documents loaded from disk
//! - `query`: search criteria and the filter/sort pipeline
//! - `models`: serialized record types separate from domain models

pub mod json;
pub mod models;
pub mod query;
pub mod source;

pub use json::JsonCatalog;
pub use models::{CatalogDocument, ListingRecord};
pub use query::{filter_and_sort, SortOrder, TourQuery};
pub use source::{CatalogSource, EmbeddedCatalog};
