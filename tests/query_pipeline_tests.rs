// tests/query_pipeline_tests.rs - Properties of the search/filter/sort pipeline
//
// Runs the public query API over the sample catalog and over small
// hand-built catalogs for the edge cases.

mod common;

use common::{ids, item, names, open_query, sample_catalog};
use lumakara_store::web_app::model::{
    ActiveFilter, CatalogItem, FacetFilter, PriceRange, QueryDescriptor, SortOption,
};
use lumakara_store::web_app::query::{evaluate, matches, results_summary, search, suggest};
use rust_decimal::Decimal;

#[test]
fn test_open_query_returns_full_catalog_in_order() {
    let catalog = sample_catalog();
    let results = evaluate(&catalog, &open_query());

    assert_eq!(results.len(), catalog.len());
    for (result, original) in results.iter().zip(catalog.iter()) {
        assert!(std::ptr::eq(*result, original));
    }
}

#[test]
fn test_default_descriptor_covers_the_sample_catalog() {
    let catalog = sample_catalog();
    let results = evaluate(&catalog, &QueryDescriptor::default());
    assert_eq!(ids(&results), ["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_soundness_and_completeness() {
    let catalog = sample_catalog();
    let descriptors = [
        QueryDescriptor {
            text: "smart".to_string(),
            ..open_query()
        },
        QueryDescriptor {
            category: FacetFilter::from("Audio"),
            ..open_query()
        },
        QueryDescriptor {
            brand: FacetFilter::from("FitPro"),
            price_range: PriceRange::new(Decimal::from(100), Decimal::from(300)),
            ..open_query()
        },
        QueryDescriptor {
            text: "PRO".to_string(),
            sort_by: SortOption::PriceDesc,
            ..open_query()
        },
    ];

    for query in &descriptors {
        let needle = query.text.to_lowercase();
        let results = evaluate(&catalog, query);

        // Every result satisfies the predicates
        assert!(results.iter().all(|item| matches(item, query, &needle)));

        // Every satisfying item appears exactly once
        for candidate in catalog.iter().filter(|item| matches(item, query, &needle)) {
            let hits = results.iter().filter(|r| std::ptr::eq(**r, candidate)).count();
            assert_eq!(hits, 1, "{} for {:?}", candidate.name, query);
        }
    }
}

#[test]
fn test_evaluation_is_idempotent() {
    let catalog = sample_catalog();
    let query = QueryDescriptor {
        text: "s".to_string(),
        sort_by: SortOption::RatingDesc,
        ..open_query()
    };

    let first = evaluate(&catalog, &query);
    let second = evaluate(&catalog, &query);
    assert_eq!(first.len(), second.len());
    assert!(first.iter().zip(&second).all(|(a, b)| std::ptr::eq(*a, *b)));
}

#[test]
fn test_price_sort_is_stable_for_ties() {
    let catalog = vec![
        item("1", "Cable A", Decimal::from(20)),
        item("2", "Adapter", Decimal::from(10)),
        item("3", "Cable B", Decimal::from(20)),
    ];

    let asc = evaluate(
        &catalog,
        &QueryDescriptor {
            sort_by: SortOption::PriceAsc,
            ..open_query()
        },
    );
    assert_eq!(names(&asc), ["Adapter", "Cable A", "Cable B"]);

    let desc = evaluate(
        &catalog,
        &QueryDescriptor {
            sort_by: SortOption::PriceDesc,
            ..open_query()
        },
    );
    assert_eq!(names(&desc), ["Cable A", "Cable B", "Adapter"]);
}

#[test]
fn test_price_bounds_are_inclusive() {
    let catalog = sample_catalog();
    let query = QueryDescriptor {
        price_range: PriceRange::new(Decimal::new(12999, 2), Decimal::new(19999, 2)),
        ..open_query()
    };
    let results = evaluate(&catalog, &query);
    assert_eq!(
        names(&results),
        ["Smart Fitness Watch", "Gaming Mechanical Keyboard", "Smart Home Hub"]
    );
}

#[test]
fn test_category_gaming() {
    let catalog = sample_catalog();
    let query = QueryDescriptor {
        category: FacetFilter::from("Gaming"),
        ..open_query()
    };
    assert_eq!(names(&evaluate(&catalog, &query)), ["Gaming Mechanical Keyboard"]);
}

#[test]
fn test_text_wireless() {
    let catalog = sample_catalog();
    let query = QueryDescriptor {
        text: "Wireless".to_string(),
        ..open_query()
    };
    let results = evaluate(&catalog, &query);
    assert_eq!(names(&results), ["Premium Wireless Headphones"]);
    assert!(!names(&results).contains(&"Portable Bluetooth Speaker".to_string()));
}

#[test]
fn test_text_matches_brand() {
    let catalog = sample_catalog();
    let query = QueryDescriptor {
        text: "soundwave".to_string(),
        ..open_query()
    };
    assert_eq!(names(&evaluate(&catalog, &query)), ["Portable Bluetooth Speaker"]);
}

#[test]
fn test_price_desc_over_full_catalog() {
    let catalog = sample_catalog();
    let query = QueryDescriptor {
        sort_by: SortOption::PriceDesc,
        ..open_query()
    };
    let results = names(&evaluate(&catalog, &query));
    assert_eq!(results.first().map(String::as_str), Some("Professional Camera Lens"));
    assert_eq!(results.last().map(String::as_str), Some("Portable Bluetooth Speaker"));
}

#[test]
fn test_rating_desc() {
    let catalog = sample_catalog();
    let query = QueryDescriptor {
        sort_by: SortOption::RatingDesc,
        ..open_query()
    };
    assert_eq!(ids(&evaluate(&catalog, &query)), ["3", "1", "4", "2", "5", "6"]);
}

#[test]
fn test_newest_puts_non_numeric_ids_last() {
    let catalog = vec![
        item("sku-a", "Legacy A", Decimal::ONE),
        item("2", "Second", Decimal::ONE),
        item("10", "Tenth", Decimal::ONE),
        item("sku-b", "Legacy B", Decimal::ONE),
    ];
    let query = QueryDescriptor {
        sort_by: SortOption::Newest,
        ..open_query()
    };
    assert_eq!(ids(&evaluate(&catalog, &query)), ["10", "2", "sku-a", "sku-b"]);
}

#[test]
fn test_inverted_range_is_empty_not_an_error() {
    let catalog = sample_catalog();
    let query = QueryDescriptor {
        price_range: PriceRange::new(Decimal::from(500), Decimal::from(100)),
        ..open_query()
    };
    assert!(query.price_range.is_inverted());
    assert!(evaluate(&catalog, &query).is_empty());
}

#[test]
fn test_empty_catalog() {
    let catalog: Vec<CatalogItem> = Vec::new();
    let results = search(&catalog, &open_query());
    assert!(results.is_empty());
    assert_eq!(results.total_count, 0);
    assert!(results.category_facets.is_empty());
}

#[test]
fn test_search_packages_facets() {
    let catalog = sample_catalog();
    let query = QueryDescriptor {
        text: "smart".to_string(),
        ..open_query()
    };
    let results = search(&catalog, &query);
    assert_eq!(results.total_count, 2);
    let categories: Vec<&str> = results
        .category_facets
        .iter()
        .map(|facet| facet.value.as_str())
        .collect();
    assert!(categories.contains(&"Wearables"));
    assert!(categories.contains(&"Smart Home"));
    assert!(results.brand_facets.iter().all(|facet| facet.count == 1));
}

#[test]
fn test_clear_all_keeps_text() {
    let mut query = QueryDescriptor {
        text: "smart".to_string(),
        category: FacetFilter::from("Wearables"),
        brand: FacetFilter::from("FitPro"),
        sort_by: SortOption::Newest,
        ..open_query()
    };
    assert_eq!(
        query.active_filters(),
        [
            ActiveFilter::Category("Wearables".to_string()),
            ActiveFilter::Brand("FitPro".to_string())
        ]
    );

    query.reset_filters_within(PriceRange::default());
    assert_eq!(query.text, "smart");
    assert!(query.category.is_all() && query.brand.is_all());
    assert_eq!(query.price_range, PriceRange::default());
    assert_eq!(query.sort_by, SortOption::Relevance);
    assert!(query.active_filters().is_empty());
}

#[test]
fn test_suggestions_feed_back_into_the_query() {
    let catalog = sample_catalog();
    let suggestions = suggest(&catalog, "blue");
    assert_eq!(suggestions, ["bluetooth", "portable bluetooth speaker"]);

    let mut query = open_query();
    query.apply_suggestion(&suggestions[0]);
    assert_eq!(names(&evaluate(&catalog, &query)), ["Portable Bluetooth Speaker"]);
}

#[test]
fn test_short_text_has_no_suggestions() {
    let catalog = sample_catalog();
    assert!(suggest(&catalog, "").is_empty());
    assert!(suggest(&catalog, "s").is_empty());
}

#[test]
fn test_results_summary() {
    assert_eq!(results_summary(6, ""), "6 products found");
    assert_eq!(results_summary(1, "lens"), "1 product found for \"lens\"");
    assert_eq!(results_summary(0, "zzz"), "0 products found for \"zzz\"");
}

#[test]
fn test_sort_keys_parse() {
    for option in SortOption::ALL {
        assert_eq!(option.key().parse::<SortOption>(), Ok(option));
    }
    assert!("cheapest".parse::<SortOption>().is_err());
}
