// common/mod.rs - Shared test utilities for the storefront integration tests
//
// Every suite builds its catalog from these helpers so the expectations
// in each file refer to the same six sample products.

#![allow(dead_code)]

use lumakara_store::fixtures::{Fixture, SearchCatalogTable};
use lumakara_store::web_app::model::{CatalogItem, PriceRange, QueryDescriptor};
use rust_decimal::Decimal;
use std::env;
use std::path::PathBuf;

/// The six sample products in catalog order
pub fn sample_catalog() -> Vec<CatalogItem> {
    SearchCatalogTable::rows()
}

/// Descriptor with no text, wildcard facets, and a price range wide
/// enough for any catalog
pub fn open_query() -> QueryDescriptor {
    QueryDescriptor {
        price_range: PriceRange::unbounded(),
        ..QueryDescriptor::default()
    }
}

/// Minimal in-stock item for hand-built catalogs
pub fn item(id: &str, name: &str, price: Decimal) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        original_price: None,
        rating: Decimal::new(40, 1),
        reviews: 0,
        category: "Electronics".to_string(),
        brand: "AudioTech".to_string(),
        in_stock: true,
        tags: Vec::new(),
        is_new: false,
        image: "/placeholder.svg".to_string(),
    }
}

pub fn names(items: &[&CatalogItem]) -> Vec<String> {
    items.iter().map(|item| item.name.clone()).collect()
}

pub fn ids(items: &[&CatalogItem]) -> Vec<String> {
    items.iter().map(|item| item.id.clone()).collect()
}

/// A path in the temp dir no other test will use
///
/// Uses the test name plus a UUID so suites can run concurrently.
pub fn unique_temp_path(test_name: &str) -> PathBuf {
    let sanitized = test_name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect::<String>();

    env::temp_dir().join(format!("{}_{}.json", sanitized, uuid::Uuid::new_v4()))
}
