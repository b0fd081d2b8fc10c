// web_app/model/mod.rs - Shared data models for the storefront
//
// These structs flow from the static catalog through the query pipeline
// and into the UI components.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::web_app::error::ParseError;

pub mod admin;

/// Upper bound of the price slider when nothing else is configured
pub const DEFAULT_PRICE_CEILING: i64 = 1000;

/// The wildcard shown first in the category and brand pickers
pub const ALL: &str = "All";

fn default_image() -> String {
    "/placeholder.svg".to_string()
}

/// A purchasable item in the storefront catalog
///
/// Field names serialize in camelCase so a catalog file can use the same
/// shape as the storefront's original product arrays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub original_price: Option<Decimal>,
    pub rating: Decimal,
    pub reviews: u32,
    pub category: String,
    pub brand: String,
    pub in_stock: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default = "default_image")]
    pub image: String,
}

impl CatalogItem {
    /// An original price means the item is discounted
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    /// Free-text match against name, tags, and brand
    ///
    /// `needle` must already be lowercased; an empty needle matches everything.
    pub fn matches_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
            || self.brand.to_lowercase().contains(needle)
    }

    /// The id read as an insertion sequence number, if it is numeric
    pub fn sequence_number(&self) -> Option<u64> {
        self.id.trim().parse().ok()
    }
}

/// Closed price interval, inclusive on both bounds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// `[0, ceiling]`, the span of the price slider
    pub fn up_to(ceiling: Decimal) -> Self {
        Self::new(Decimal::ZERO, ceiling)
    }

    /// `[0, +inf)` for all practical prices
    pub fn unbounded() -> Self {
        Self::new(Decimal::ZERO, Decimal::MAX)
    }

    /// An inverted range (min > max) contains nothing
    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::up_to(Decimal::from(DEFAULT_PRICE_CEILING))
    }
}

/// Category or brand selection: the "All" wildcard or one exact value
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FacetFilter {
    #[default]
    All,
    Only(String),
}

impl FacetFilter {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FacetFilter::All => true,
            FacetFilter::Only(selected) => selected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetFilter::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            FacetFilter::All => ALL,
            FacetFilter::Only(value) => value,
        }
    }
}

impl From<&str> for FacetFilter {
    fn from(value: &str) -> Self {
        if value == ALL {
            FacetFilter::All
        } else {
            FacetFilter::Only(value.to_string())
        }
    }
}

impl From<String> for FacetFilter {
    fn from(value: String) -> Self {
        if value == ALL {
            FacetFilter::All
        } else {
            FacetFilter::Only(value)
        }
    }
}

impl From<FacetFilter> for String {
    fn from(filter: FacetFilter) -> Self {
        match filter {
            FacetFilter::All => ALL.to_string(),
            FacetFilter::Only(value) => value,
        }
    }
}

impl fmt::Display for FacetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering selected in the sort dropdown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order, untouched
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    /// Highest numeric id first
    Newest,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Relevance,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingDesc,
        SortOption::Newest,
    ];

    /// Stable key used in select values and serialized descriptors
    pub fn key(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::RatingDesc => "rating-desc",
            SortOption::Newest => "newest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevance",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::RatingDesc => "Highest Rated",
            SortOption::Newest => "Newest First",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOption {
    type Err = ParseError;

    // Accepts the storefront's older select values too
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortOption::Relevance),
            "price-asc" | "price-low" => Ok(SortOption::PriceAsc),
            "price-desc" | "price-high" => Ok(SortOption::PriceDesc),
            "rating-desc" | "rating" => Ok(SortOption::RatingDesc),
            "newest" => Ok(SortOption::Newest),
            other => Err(ParseError::UnknownSortKey(other.to_string())),
        }
    }
}

/// A removable badge for a non-wildcard filter
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActiveFilter {
    Category(String),
    Brand(String),
}

impl ActiveFilter {
    pub fn label(&self) -> &str {
        match self {
            ActiveFilter::Category(value) | ActiveFilter::Brand(value) => value,
        }
    }
}

/// The combined state of every search, filter, and sort control
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    pub text: String,
    pub category: FacetFilter,
    pub brand: FacetFilter,
    pub price_range: PriceRange,
    pub sort_by: SortOption,
}

impl QueryDescriptor {
    /// Defaults, with the price range spanning `[0, ceiling]`
    pub fn with_price_ceiling(ceiling: Decimal) -> Self {
        Self {
            price_range: PriceRange::up_to(ceiling),
            ..Self::default()
        }
    }

    /// "Clear All Filters": everything except the search text
    ///
    /// `price_range` is the page's default range for its catalog.
    pub fn reset_filters_within(&mut self, price_range: PriceRange) {
        self.category = FacetFilter::All;
        self.brand = FacetFilter::All;
        self.price_range = price_range;
        self.sort_by = SortOption::Relevance;
    }

    pub fn clear_category(&mut self) {
        self.category = FacetFilter::All;
    }

    pub fn clear_brand(&mut self) {
        self.brand = FacetFilter::All;
    }

    pub fn clear(&mut self, filter: &ActiveFilter) {
        match filter {
            ActiveFilter::Category(_) => self.clear_category(),
            ActiveFilter::Brand(_) => self.clear_brand(),
        }
    }

    /// Category badge first, then brand
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut active = Vec::new();
        if let FacetFilter::Only(category) = &self.category {
            active.push(ActiveFilter::Category(category.clone()));
        }
        if let FacetFilter::Only(brand) = &self.brand {
            active.push(ActiveFilter::Brand(brand.clone()));
        }
        active
    }

    pub fn apply_suggestion(&mut self, suggestion: &str) {
        self.text = suggestion.to_string();
    }
}

/// Facet count for the category and brand pickers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// Search response: the evaluated items plus their facets
///
/// Items borrow from the catalog, so identity is preserved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResults<'a> {
    pub items: Vec<&'a CatalogItem>,
    pub total_count: usize,
    pub category_facets: Vec<FacetCount>,
    pub brand_facets: Vec<FacetCount>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
