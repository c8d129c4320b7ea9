//! Filtering and ordering of tour listings.
//!
//! Implements the search pipeline behind the browser: free-text matching over
//! name, description, and location, exact category matching, and one of three
//! total orderings over the surviving subset. The whole pipeline is a pure
//! function over its inputs — the catalog is never mutated, and identical
//! inputs always produce identical output.

use crate::domain::{Category, TourListing};

/// Ordering applied to the filtered subset.
///
/// All three orderings are stable: listings that compare equal keep their
/// relative order from the source catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending by price.
    PriceLowToHigh,
    /// Descending by price.
    PriceHighToLow,
    /// Descending by rating (the default).
    #[default]
    Rating,
}

impl SortOrder {
    /// Parses a sort order from its configuration name.
    ///
    /// Unrecognized names fall back to [`SortOrder::Rating`] rather than
    /// erroring, so a stale or mistyped value degrades to the default order.
    ///
    /// # Examples
    ///
    /// ```
    /// use travelink::catalog::SortOrder;
    ///
    /// assert_eq!(SortOrder::from_name("price-low"), SortOrder::PriceLowToHigh);
    /// assert_eq!(SortOrder::from_name("banana"), SortOrder::Rating);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "price-low" => Self::PriceLowToHigh,
            "price-high" => Self::PriceHighToLow,
            _ => Self::Rating,
        }
    }

    /// The configuration name of this sort order.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::Rating => "rating",
        }
    }

    /// Human-readable label shown in the filter bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::Rating => "Highest Rating",
        }
    }

    /// The next sort order in cycle order (rating → price-low → price-high).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Rating => Self::PriceLowToHigh,
            Self::PriceLowToHigh => Self::PriceHighToLow,
            Self::PriceHighToLow => Self::Rating,
        }
    }
}

/// Search criteria applied to a catalog.
///
/// The default query (empty text, no category, rating sort) retains the whole
/// catalog ordered by descending rating.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TourQuery {
    /// Free-text needle matched case-insensitively against each listing's
    /// name, description, and location. Empty means no text filtering.
    pub text: String,

    /// Exact category filter. `None` means all categories.
    pub category: Option<Category>,

    /// Ordering applied to the filtered subset.
    pub sort: SortOrder,
}

impl TourQuery {
    /// Whether this query is the unfiltered default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.text.is_empty() && self.category.is_none() && self.sort == SortOrder::default()
    }
}

/// Filters and orders a catalog according to a query.
///
/// The pipeline runs in three steps:
///
/// 1. If the query text is non-empty, retain only listings whose name,
///    description, or location contains it as a case-insensitive substring.
/// 2. If a category is set, retain only listings of exactly that category.
/// 3. Stable-sort the survivors by the query's sort order.
///
/// The source slice is left untouched; the result is an owned, ordered copy of
/// the matching listings. There are no failure paths.
///
/// # Examples
///
/// ```
/// use travelink::catalog::{filter_and_sort, SortOrder, TourQuery};
///
/// let catalog = travelink::catalog::EmbeddedCatalog::listings().unwrap();
/// let query = TourQuery {
///     text: "bali".to_string(),
///     category: None,
///     sort: SortOrder::Rating,
/// };
///
/// let results = filter_and_sort(&catalog, &query);
/// assert!(results.iter().all(|tour| {
///     let needle = "bali";
///     tour.name.to_lowercase().contains(needle)
///         || tour.description.to_lowercase().contains(needle)
///         || tour.location.to_lowercase().contains(needle)
/// }));
/// ```
#[must_use]
pub fn filter_and_sort(catalog: &[TourListing], query: &TourQuery) -> Vec<TourListing> {
    let _span = tracing::debug_span!("filter_and_sort",
        catalog_len = catalog.len(),
        text_len = query.text.len(),
        category = ?query.category,
        sort = query.sort.name()
    )
    .entered();

    let needle = query.text.to_lowercase();

    let mut results: Vec<TourListing> = catalog
        .iter()
        .filter(|listing| {
            if !needle.is_empty() && !matches_text(listing, &needle) {
                return false;
            }
            match query.category {
                Some(category) => listing.category == category,
                None => true,
            }
        })
        .cloned()
        .collect();

    match query.sort {
        SortOrder::PriceLowToHigh => results.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceHighToLow => results.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::Rating => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    tracing::debug!(result_count = results.len(), "filter applied");

    results
}

/// Case-insensitive substring match over a listing's searchable fields.
///
/// The needle must already be lowercased.
fn matches_text(listing: &TourListing, needle: &str) -> bool {
    listing.name.to_lowercase().contains(needle)
        || listing.description.to_lowercase().contains(needle)
        || listing.location.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: u32, name: &str, price: u64, rating: f32, category: Category) -> TourListing {
        TourListing {
            id,
            name: name.to_string(),
            location: "Somewhere".to_string(),
            description: String::new(),
            image: String::new(),
            price,
            rating,
            reviews: 10,
            duration: "1 day".to_string(),
            category,
            featured: false,
        }
    }

    #[test]
    fn text_match_is_case_insensitive() {
        let catalog = vec![listing(1, "Bali Beach Hopping", 100, 4.9, Category::Beach)];

        for text in ["bali", "BALI", "bAlI"] {
            let query = TourQuery {
                text: text.to_string(),
                ..TourQuery::default()
            };
            assert_eq!(filter_and_sort(&catalog, &query).len(), 1, "query {text:?}");
        }
    }

    #[test]
    fn text_match_covers_description_and_location() {
        let mut tour = listing(1, "Sunrise Trek", 100, 4.5, Category::Mountain);
        tour.description = "Watch the dawn over the caldera".to_string();
        tour.location = "Lombok".to_string();
        let catalog = vec![tour];

        for text in ["caldera", "lombok"] {
            let query = TourQuery {
                text: text.to_string(),
                ..TourQuery::default()
            };
            assert_eq!(filter_and_sort(&catalog, &query).len(), 1, "query {text:?}");
        }
    }

    #[test]
    fn rating_ties_keep_catalog_order() {
        let catalog = vec![
            listing(1, "First", 300, 4.8, Category::Beach),
            listing(2, "Second", 100, 4.8, Category::Beach),
            listing(3, "Third", 200, 4.8, Category::Beach),
        ];

        let query = TourQuery::default();
        let ids: Vec<u32> = filter_and_sort(&catalog, &query).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn source_catalog_is_not_mutated() {
        let catalog = vec![
            listing(1, "A", 300, 4.1, Category::City),
            listing(2, "B", 100, 4.9, Category::City),
        ];
        let before = catalog.clone();

        let query = TourQuery {
            sort: SortOrder::PriceLowToHigh,
            ..TourQuery::default()
        };
        let _ = filter_and_sort(&catalog, &query);

        assert_eq!(catalog, before);
    }

    #[test]
    fn unknown_sort_names_fall_back_to_rating() {
        assert_eq!(SortOrder::from_name("rating"), SortOrder::Rating);
        assert_eq!(SortOrder::from_name(""), SortOrder::Rating);
        assert_eq!(SortOrder::from_name("price_low"), SortOrder::Rating);
    }

    #[test]
    fn sort_cycle_visits_every_order() {
        let start = SortOrder::Rating;
        let mut seen = vec![start];
        let mut current = start.next();
        while current != start {
            seen.push(current);
            current = current.next();
        }
        assert_eq!(seen.len(), 3);
    }
}
