//! Tour listing domain model and display helpers.
//!
//! This module defines the core `TourListing` type representing a single tour
//! offering in the catalog, along with the closed [`Category`] classification
//! set and Indonesian rupiah price formatting used by the card UI.

use serde::{Deserialize, Serialize};

/// Tour classification used for category filtering.
///
/// The set is closed: every listing carries exactly one of these values, and
/// the category filter matches by exact equality. Serialized catalogs use the
/// lowercase names (`"beach"`, `"mountain"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beach,
    Mountain,
    City,
    Culture,
    Diving,
    Nature,
}

impl Category {
    /// All categories in display order, matching the chip row in the UI.
    pub const ALL: [Self; 6] = [
        Self::Beach,
        Self::Mountain,
        Self::City,
        Self::Culture,
        Self::Diving,
        Self::Nature,
    ];

    /// Parses a category from its lowercase name.
    ///
    /// Returns `None` for unknown names; callers at the load boundary turn
    /// that into a catalog error.
    ///
    /// # Examples
    ///
    /// ```
    /// use travelink::domain::Category;
    ///
    /// assert_eq!(Category::from_name("diving"), Some(Category::Diving));
    /// assert_eq!(Category::from_name("space"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "beach" => Some(Self::Beach),
            "mountain" => Some(Self::Mountain),
            "city" => Some(Self::City),
            "culture" => Some(Self::Culture),
            "diving" => Some(Self::Diving),
            "nature" => Some(Self::Nature),
            _ => None,
        }
    }

    /// The lowercase name used in serialized catalogs and filters.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beach => "beach",
            Self::Mountain => "mountain",
            Self::City => "city",
            Self::Culture => "culture",
            Self::Diving => "diving",
            Self::Nature => "nature",
        }
    }

    /// Capitalized label for chips and card subtitles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beach => "Beach",
            Self::Mountain => "Mountain",
            Self::City => "City",
            Self::Culture => "Culture",
            Self::Diving => "Diving",
            Self::Nature => "Nature",
        }
    }

    /// Emoji icon shown next to the label.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Beach => "🏖️",
            Self::Mountain => "🏔️",
            Self::City => "🏙️",
            Self::Culture => "🏛️",
            Self::Diving => "🤿",
            Self::Nature => "🌿",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single tour offering in the catalog.
///
/// Listings are loaded once at startup and never mutated afterwards. Prices
/// are Indonesian rupiah with a minor unit of 1, so `u64` carries the exact
/// amount; ratings live in `[0.0, 5.0]`, validated at the load boundary.
///
/// # Fields
///
/// - `id`: unique identifier within the catalog
/// - `name`, `location`, `description`: display text, all searchable
/// - `image`: URL of the card photo (carried for parity with the catalog
///   format; the terminal UI does not render it)
/// - `price`: per-person price in IDR
/// - `rating`: average review score in `[0.0, 5.0]`
/// - `reviews`: number of reviews behind the rating
/// - `duration`: free-text length label ("8 hours", "3 days")
/// - `category`: classification used for filtering
/// - `featured`: whether the listing is highlighted on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourListing {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub description: String,
    pub image: String,
    pub price: u64,
    pub rating: f32,
    pub reviews: u32,
    pub duration: String,
    pub category: Category,
    pub featured: bool,
}

impl TourListing {
    /// Formats the price as rupiah for display, e.g. `Rp 1.200.000`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }

    /// Formats the rating with one decimal place, e.g. `4.9`.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// Formats an IDR amount with dot-grouped thousands and no decimal places,
/// following the Indonesian display convention.
///
/// # Examples
///
/// ```
/// use travelink::domain::format_price;
///
/// assert_eq!(format_price(1_200_000), "Rp 1.200.000");
/// assert_eq!(format_price(950), "Rp 950");
/// ```
#[must_use]
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("Rp {grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_formatting_groups_thousands() {
        assert_eq!(format_price(0), "Rp 0");
        assert_eq!(format_price(500), "Rp 500");
        assert_eq!(format_price(500_000), "Rp 500.000");
        assert_eq!(format_price(1_200_000), "Rp 1.200.000");
        assert_eq!(format_price(3_200_000), "Rp 3.200.000");
        assert_eq!(format_price(12_345_678), "Rp 12.345.678");
    }

    #[test]
    fn category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name("Beach"), None);
        assert_eq!(Category::from_name(""), None);
    }
}
