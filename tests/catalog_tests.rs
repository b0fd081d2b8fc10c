// tests/catalog_tests.rs - Loading and validating catalogs from JSON
//
// Covers the camelCase file format, defaults for optional fields, the
// validation errors, and reading a catalog file from disk.

mod common;

use common::{sample_catalog, unique_temp_path};
use lumakara_store::web_app::catalog::Catalog;
use lumakara_store::web_app::config::StorefrontConfig;
use lumakara_store::web_app::error::CatalogError;
use lumakara_store::web_app::model::{PriceRange, QueryDescriptor};
use lumakara_store::web_app::query::evaluate;
use rust_decimal::Decimal;
use std::fs;

const TWO_ITEMS: &str = r#"[
    {
        "id": "101",
        "name": "Noise Canceling Earbuds",
        "price": 149.5,
        "originalPrice": "199.00",
        "rating": 4.3,
        "reviews": 88,
        "category": "Audio",
        "brand": "SoundWave",
        "inStock": true,
        "tags": ["earbuds", "noise-canceling"],
        "isNew": true,
        "image": "/images/earbuds.png"
    },
    {
        "id": "102",
        "name": "USB-C Hub",
        "price": 39,
        "rating": 4,
        "reviews": 12,
        "category": "Electronics",
        "brand": "HomeTech",
        "inStock": false
    }
]"#;

#[test]
fn test_from_json_reads_camel_case_fields() {
    let catalog = Catalog::from_json(TWO_ITEMS).unwrap();
    assert_eq!(catalog.len(), 2);

    let earbuds = catalog.find("101").unwrap();
    assert_eq!(earbuds.price, Decimal::new(1495, 1));
    assert_eq!(earbuds.original_price, Some(Decimal::from(199)));
    assert!(earbuds.is_new && earbuds.in_stock && earbuds.is_on_sale());
    assert_eq!(earbuds.image, "/images/earbuds.png");
}

#[test]
fn test_optional_fields_default() {
    let catalog = Catalog::from_json(TWO_ITEMS).unwrap();
    let hub = catalog.find("102").unwrap();
    assert!(hub.tags.is_empty());
    assert!(hub.original_price.is_none());
    assert!(!hub.is_new && !hub.in_stock);
    assert_eq!(hub.image, "/placeholder.svg");
}

#[test]
fn test_loaded_catalog_drives_the_pickers_and_queries() {
    let catalog = Catalog::from_json(TWO_ITEMS).unwrap();
    assert_eq!(catalog.categories(), ["All", "Audio", "Electronics"]);
    assert_eq!(catalog.brands(), ["All", "SoundWave", "HomeTech"]);

    let query = QueryDescriptor {
        text: "earbuds".to_string(),
        ..QueryDescriptor::default()
    };
    let results = evaluate(catalog.items(), &query);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "101");
}

#[test]
fn test_sample_round_trips_through_json() {
    let json = serde_json::to_string(&sample_catalog()).unwrap();
    let catalog = Catalog::from_json(&json).unwrap();
    assert_eq!(catalog.items(), Catalog::sample().items());
}

#[test]
fn test_invalid_json_is_an_error() {
    assert!(matches!(
        Catalog::from_json("{\"id\": \"1\"}"),
        Err(CatalogError::Json(_))
    ));
}

#[test]
fn test_missing_required_field_is_an_error() {
    let json = r#"[{"id": "1", "name": "No price", "rating": 4, "reviews": 0,
                   "category": "Audio", "brand": "SoundWave", "inStock": true}]"#;
    assert!(matches!(Catalog::from_json(json), Err(CatalogError::Json(_))));
}

#[test]
fn test_validation_runs_after_parsing() {
    let json = TWO_ITEMS.replace("\"102\"", "\"101\"");
    let err = Catalog::from_json(&json).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "101"));
    assert_eq!(err.to_string(), "duplicate catalog id '101'");
}

#[test]
fn test_load_from_file() {
    let path = unique_temp_path("test_load_from_file");
    fs::write(&path, TWO_ITEMS).unwrap();

    let loaded = Catalog::load(&path);
    fs::remove_file(&path).ok();

    let catalog = loaded.unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.max_price(), Decimal::new(1495, 1));
}

#[test]
fn test_default_query_covers_a_loaded_catalog_above_the_ceiling() {
    let json = r#"[
        {"id": "1", "name": "Travel Adapter", "price": 10, "rating": 4.1, "reviews": 5,
         "category": "Accessories", "brand": "HomeTech", "inStock": true},
        {"id": "2", "name": "Mirrorless Camera", "price": 1500, "rating": 4.8, "reviews": 40,
         "category": "Photo", "brand": "Lumix", "inStock": true}
    ]"#;
    let path = unique_temp_path("test_default_query_covers_a_loaded_catalog");
    fs::write(&path, json).unwrap();
    let loaded = Catalog::load(&path);
    fs::remove_file(&path).ok();
    let catalog = loaded.unwrap();

    let config = StorefrontConfig::default();
    assert!(catalog.max_price() > config.price_ceiling);

    let ceiling = config.price_ceiling_for(&catalog);
    let query = QueryDescriptor::with_price_ceiling(ceiling);
    assert_eq!(evaluate(catalog.items(), &query).len(), catalog.len());

    // "Clear All Filters" lands on the same range
    let mut narrowed = QueryDescriptor {
        price_range: PriceRange::new(Decimal::ZERO, Decimal::from(50)),
        ..query.clone()
    };
    narrowed.reset_filters_within(config.default_price_range(&catalog));
    assert_eq!(narrowed, query);
    assert_eq!(evaluate(catalog.items(), &narrowed).len(), 2);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let path = unique_temp_path("test_load_missing_file");
    assert!(matches!(Catalog::load(&path), Err(CatalogError::Io(_))));
}
