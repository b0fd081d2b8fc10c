// fixtures/tables/products.rs
//
// The six-item catalog behind the search page, in relevance order.
// Ids double as insertion sequence numbers for the "newest" sort.

use rust_decimal::Decimal;

use crate::fixtures::Fixture;
use crate::web_app::model::CatalogItem;

/// Category picker options, wildcard first
pub const CATEGORIES: [&str; 7] = [
    "All",
    "Electronics",
    "Wearables",
    "Photography",
    "Gaming",
    "Audio",
    "Smart Home",
];

/// Brand picker options, wildcard first
pub const BRANDS: [&str; 7] = [
    "All",
    "AudioTech",
    "FitPro",
    "LensMaster",
    "GamePro",
    "SoundWave",
    "HomeTech",
];

pub struct SearchCatalogTable;

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    price_cents: i64,
    original_cents: i64,
    rating_tenths: i64,
    reviews: u32,
    category: &str,
    brand: &str,
    in_stock: bool,
    tags: [&str; 3],
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        price: Decimal::new(price_cents, 2),
        original_price: Some(Decimal::new(original_cents, 2)),
        rating: Decimal::new(rating_tenths, 1),
        reviews,
        category: category.to_string(),
        brand: brand.to_string(),
        in_stock,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        is_new: false,
        image: "/placeholder.svg".to_string(),
    }
}

impl Fixture for SearchCatalogTable {
    type Row = CatalogItem;

    fn rows() -> Vec<CatalogItem> {
        vec![
            product(
                "1",
                "Premium Wireless Headphones",
                29999,
                39999,
                48,
                1247,
                "Electronics",
                "AudioTech",
                true,
                ["wireless", "premium", "noise-canceling"],
            ),
            product(
                "2",
                "Smart Fitness Watch",
                19999,
                24999,
                46,
                892,
                "Wearables",
                "FitPro",
                true,
                ["fitness", "smart", "health"],
            ),
            product(
                "3",
                "Professional Camera Lens",
                79999,
                89999,
                49,
                534,
                "Photography",
                "LensMaster",
                false,
                ["professional", "photography", "zoom"],
            ),
            product(
                "4",
                "Gaming Mechanical Keyboard",
                15999,
                19999,
                47,
                2156,
                "Gaming",
                "GamePro",
                true,
                ["gaming", "mechanical", "rgb"],
            ),
            product(
                "5",
                "Portable Bluetooth Speaker",
                8999,
                11999,
                45,
                743,
                "Audio",
                "SoundWave",
                true,
                ["portable", "bluetooth", "waterproof"],
            ),
            product(
                "6",
                "Smart Home Hub",
                12999,
                15999,
                44,
                612,
                "Smart Home",
                "HomeTech",
                true,
                ["smart-home", "automation", "voice-control"],
            ),
        ]
    }
}
