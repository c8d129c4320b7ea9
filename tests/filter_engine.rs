//! End-to-end checks of the filter/sort pipeline over the sample catalog.

use travelink::catalog::{filter_and_sort, EmbeddedCatalog, SortOrder, TourQuery};
use travelink::{Category, TourListing};

/// The six original sample tours (Bali through Komodo), the subset the
/// browser shipped with before the catalog grew.
fn sample_catalog() -> Vec<TourListing> {
    EmbeddedCatalog::listings()
        .unwrap()
        .into_iter()
        .filter(|listing| listing.id <= 6)
        .collect()
}

fn query(text: &str, category: Option<Category>, sort: SortOrder) -> TourQuery {
    TourQuery {
        text: text.to_string(),
        category,
        sort,
    }
}

#[test]
fn default_query_returns_everything_by_descending_rating() {
    let catalog = sample_catalog();
    let results = filter_and_sort(&catalog, &TourQuery::default());

    assert_eq!(results.len(), catalog.len());
    assert!(results
        .windows(2)
        .all(|pair| pair[0].rating >= pair[1].rating));

    // Rating ties break by catalog order: Bali (4.9) before Borobudur (4.9),
    // Rinjani (4.8) before Komodo (4.8).
    let ids: Vec<u32> = results.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![5, 1, 4, 2, 6, 3]);
}

#[test]
fn partial_name_match_yields_exactly_one_listing() {
    let catalog = sample_catalog();
    let results = filter_and_sort(&catalog, &query("rinjani", None, SortOrder::Rating));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Mount Rinjani Trek");
}

#[test]
fn bali_search_finds_the_beach_hopping_tour() {
    let catalog = sample_catalog();
    let results = filter_and_sort(&catalog, &query("bali", None, SortOrder::Rating));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Bali Beach Hopping Adventure");
    assert!((results[0].rating - 4.9).abs() < f32::EPSILON);
}

#[test]
fn diving_by_price_returns_only_raja_ampat() {
    let catalog = sample_catalog();
    let results = filter_and_sort(
        &catalog,
        &query("", Some(Category::Diving), SortOrder::PriceLowToHigh),
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Raja Ampat Diving Experience");
}

#[test]
fn absent_category_yields_empty_not_error() {
    // The first four sample tours cover beach, mountain, city, and culture,
    // so a diving filter over them matches nothing.
    let catalog: Vec<TourListing> = sample_catalog()
        .into_iter()
        .filter(|listing| listing.id <= 4)
        .collect();

    let results = filter_and_sort(
        &catalog,
        &query("", Some(Category::Diving), SortOrder::Rating),
    );
    assert!(results.is_empty());
}

#[test]
fn price_orders_are_exact_reverses_of_each_other() {
    let catalog = sample_catalog();

    let ascending = filter_and_sort(&catalog, &query("", None, SortOrder::PriceLowToHigh));
    let descending = filter_and_sort(&catalog, &query("", None, SortOrder::PriceHighToLow));

    assert!(ascending
        .windows(2)
        .all(|pair| pair[0].price <= pair[1].price));

    let mut reversed = descending;
    reversed.reverse();
    assert_eq!(ascending, reversed);
}

#[test]
fn text_and_category_filters_compose() {
    let catalog = sample_catalog();

    // "tour" matches Jakarta, Borobudur, and Komodo (via its description);
    // the culture filter narrows that to Borobudur.
    let results = filter_and_sort(
        &catalog,
        &query("tour", Some(Category::Culture), SortOrder::Rating),
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 4);
}

#[test]
fn identical_queries_give_identical_results() {
    let catalog = sample_catalog();
    let q = query("a", Some(Category::Nature), SortOrder::PriceHighToLow);

    let first = filter_and_sort(&catalog, &q);
    let second = filter_and_sort(&catalog, &q);

    assert_eq!(first, second);
}

#[test]
fn the_catalog_is_left_untouched() {
    let catalog = sample_catalog();
    let before = catalog.clone();

    let _ = filter_and_sort(&catalog, &query("", None, SortOrder::PriceHighToLow));
    let _ = filter_and_sort(&catalog, &query("beach", None, SortOrder::Rating));

    assert_eq!(catalog, before);
}
