// web_app/query.rs - The product search/filter/sort pipeline
//
// Every function here is pure over a borrowed catalog: filter with the four
// predicates, then order by the selected sort key. Results borrow from the
// catalog, so items come back with their identity intact.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::web_app::model::*;

/// Suggestions shown under the search box, at most
pub const MAX_SUGGESTIONS: usize = 5;

/// Filter then order the catalog for one query descriptor
pub fn evaluate<'a>(catalog: &'a [CatalogItem], query: &QueryDescriptor) -> Vec<&'a CatalogItem> {
    let needle = query.text.to_lowercase();

    let mut items: Vec<&CatalogItem> = catalog
        .iter()
        .filter(|item| matches(item, query, &needle))
        .collect();

    sort(&mut items, query.sort_by);

    tracing::debug!(
        "Evaluated query {:?}: {} of {} items, sorted by {}",
        query.text,
        items.len(),
        catalog.len(),
        query.sort_by.key()
    );

    items
}

/// All four predicates must hold; `needle` is the lowercased search text
pub fn matches(item: &CatalogItem, query: &QueryDescriptor, needle: &str) -> bool {
    item.matches_text(needle)
        && query.category.matches(&item.category)
        && query.brand.matches(&item.brand)
        && query.price_range.contains(item.price)
}

/// Stable sort, so ties keep their catalog order
pub fn sort(items: &mut [&CatalogItem], sort_by: SortOption) {
    match sort_by {
        SortOption::Relevance => {}
        SortOption::PriceAsc => items.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceDesc => items.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::RatingDesc => items.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortOption::Newest => items.sort_by(|a, b| newest_first(a, b)),
    }
}

// Numeric ids descending; non-numeric ids after every numeric one
fn newest_first(a: &CatalogItem, b: &CatalogItem) -> Ordering {
    match (a.sequence_number(), b.sequence_number()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Autocomplete candidates for the search box
///
/// Needs more than one character. Draws from every tag, then every
/// lowercased name, in catalog order; duplicates are dropped and the first
/// `MAX_SUGGESTIONS` matches win.
pub fn suggest(catalog: &[CatalogItem], text: &str) -> Vec<String> {
    if text.chars().count() <= 1 {
        return Vec::new();
    }

    let needle = text.to_lowercase();
    let tags = catalog.iter().flat_map(|item| item.tags.iter().cloned());
    let names = catalog.iter().map(|item| item.name.to_lowercase());

    let mut seen = HashSet::new();
    tags.chain(names)
        .filter(|candidate| seen.insert(candidate.clone()))
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}

fn facet_counts<'a>(
    items: &[&'a CatalogItem],
    key: impl Fn(&'a CatalogItem) -> &'a str,
) -> Vec<FacetCount> {
    let mut facets: Vec<FacetCount> = Vec::new();
    for &item in items {
        let value = key(item);
        match facets.iter_mut().find(|facet| facet.value == value) {
            Some(facet) => facet.count += 1,
            None => facets.push(FacetCount {
                value: value.to_string(),
                count: 1,
            }),
        }
    }
    // Stable, so equal counts stay in first-appearance order
    facets.sort_by(|a, b| b.count.cmp(&a.count));
    facets
}

fn category_of(item: &CatalogItem) -> &str {
    &item.category
}

fn brand_of(item: &CatalogItem) -> &str {
    &item.brand
}

pub fn category_facets(items: &[&CatalogItem]) -> Vec<FacetCount> {
    facet_counts(items, category_of)
}

pub fn brand_facets(items: &[&CatalogItem]) -> Vec<FacetCount> {
    facet_counts(items, brand_of)
}

/// Evaluate the query and package the items with their count and facets
pub fn search<'a>(catalog: &'a [CatalogItem], query: &QueryDescriptor) -> SearchResults<'a> {
    let items = evaluate(catalog, query);
    let category_facets = category_facets(&items);
    let brand_facets = brand_facets(&items);

    SearchResults {
        total_count: items.len(),
        items,
        category_facets,
        brand_facets,
    }
}

/// Result count line, e.g. `3 products found for "smart"`
pub fn results_summary(count: usize, text: &str) -> String {
    let noun = if count == 1 { "product" } else { "products" };
    if text.is_empty() {
        format!("{count} {noun} found")
    } else {
        format!("{count} {noun} found for \"{text}\"")
    }
}
