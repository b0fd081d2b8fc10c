// web_app/catalog.rs - The static, read-only product catalog
//
// A catalog is validated once when it is built and never changes after.
// The process-wide instance lives in a OnceLock: the server binary
// installs it at startup, and every page reads it by shared reference.

use rust_decimal::Decimal;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use crate::fixtures::{Fixture, SearchCatalogTable};
use crate::web_app::error::CatalogError;
use crate::web_app::model::{CatalogItem, ALL};

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Install the global catalog
///
/// Only the first call takes effect.
pub fn init(catalog: Catalog) {
    tracing::info!("Initializing global catalog with {} items", catalog.len());
    if CATALOG.set(catalog).is_err() {
        tracing::warn!("Catalog already initialized, keeping the existing one");
    } else {
        tracing::info!("Global catalog initialized successfully");
    }
}

/// Get the global catalog, falling back to the built-in sample
pub fn get() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        tracing::debug!("No catalog installed, using the built-in sample");
        Catalog::sample()
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, rejecting items that break the catalog invariants
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        validate(&items)?;
        Ok(Self { items })
    }

    /// The six-item search catalog shipped with the storefront
    pub fn sample() -> Self {
        Self {
            items: SearchCatalogTable::rows(),
        }
    }

    /// Parse a JSON array of items, then validate it
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Read and parse a JSON catalog file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        tracing::info!("Loading catalog from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Category picker options: "All", then each category in catalog order
    pub fn categories(&self) -> Vec<String> {
        picker_options(self.items.iter().map(|item| item.category.as_str()))
    }

    /// Brand picker options: "All", then each brand in catalog order
    pub fn brands(&self) -> Vec<String> {
        picker_options(self.items.iter().map(|item| item.brand.as_str()))
    }

    /// Highest price in the catalog, zero when empty
    pub fn max_price(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price)
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}

fn picker_options<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    std::iter::once(ALL)
        .chain(values)
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

fn validate(items: &[CatalogItem]) -> Result<(), CatalogError> {
    let five = Decimal::from(5);
    let mut ids = HashSet::new();

    for (position, item) in items.iter().enumerate() {
        if item.id.trim().is_empty() {
            return Err(CatalogError::EmptyId { position });
        }
        if !ids.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateId(item.id.clone()));
        }
        if item.price.is_sign_negative() && !item.price.is_zero() {
            return Err(CatalogError::NegativePrice {
                id: item.id.clone(),
                price: item.price,
            });
        }
        if let Some(original) = item.original_price {
            if original < item.price {
                return Err(CatalogError::OriginalBelowPrice {
                    id: item.id.clone(),
                    price: item.price,
                    original,
                });
            }
        }
        if item.rating < Decimal::ZERO || item.rating > five {
            return Err(CatalogError::RatingOutOfRange {
                id: item.id.clone(),
                rating: item.rating,
            });
        }
        if let Some(tag) = item.tags.iter().find(|tag| tag.to_lowercase() != **tag) {
            return Err(CatalogError::TagNotLowercase {
                id: item.id.clone(),
                tag: tag.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_passes_validation() {
        let sample = Catalog::sample();
        let rebuilt = Catalog::new(sample.items().to_vec());
        assert!(rebuilt.is_ok());
        assert_eq!(sample.len(), 6);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut items = SearchCatalogTable::rows();
        items[1].id = "1".to_string();
        let err = Catalog::new(items).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut items = SearchCatalogTable::rows();
        items[2].id = "  ".to_string();
        let err = Catalog::new(items).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyId { position: 2 }));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut items = SearchCatalogTable::rows();
        items[0].price = Decimal::new(-1, 0);
        items[0].original_price = None;
        assert!(matches!(
            Catalog::new(items),
            Err(CatalogError::NegativePrice { .. })
        ));
    }

    #[test]
    fn test_original_below_price_rejected() {
        let mut items = SearchCatalogTable::rows();
        items[3].original_price = Some(Decimal::new(9999, 2));
        assert!(matches!(
            Catalog::new(items),
            Err(CatalogError::OriginalBelowPrice { .. })
        ));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut items = SearchCatalogTable::rows();
        items[4].rating = Decimal::new(51, 1);
        assert!(matches!(
            Catalog::new(items),
            Err(CatalogError::RatingOutOfRange { .. })
        ));
    }

    #[test]
    fn test_uppercase_tag_rejected() {
        let mut items = SearchCatalogTable::rows();
        items[5].tags.push("Alexa".to_string());
        let err = Catalog::new(items).unwrap_err();
        assert!(matches!(err, CatalogError::TagNotLowercase { tag, .. } if tag == "Alexa"));
    }

    #[test]
    fn test_picker_options() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.categories(),
            ["All", "Electronics", "Wearables", "Photography", "Gaming", "Audio", "Smart Home"]
        );
        assert_eq!(catalog.brands()[0], "All");
        assert_eq!(catalog.brands().len(), 7);
    }

    #[test]
    fn test_find_and_max_price() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.find("4").map(|item| item.name.as_str()),
            Some("Gaming Mechanical Keyboard")
        );
        assert!(catalog.find("404").is_none());
        assert_eq!(catalog.max_price(), Decimal::new(79999, 2));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.max_price(), Decimal::ZERO);
        assert_eq!(catalog.categories(), ["All"]);
    }

    #[test]
    fn test_global_catalog_falls_back_to_sample() {
        // Other tests never call init(), so the fallback is what we get
        let catalog = get();
        assert!(!catalog.is_empty());
        assert!(std::ptr::eq(catalog, get()));
    }
}
