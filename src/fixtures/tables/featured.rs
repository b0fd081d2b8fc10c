// fixtures/tables/featured.rs
//
// The digital products showcased on the home page. They are not part of
// the search catalog, so their ids carry their own prefix.

use rust_decimal::Decimal;

use crate::fixtures::Fixture;
use crate::web_app::model::CatalogItem;

pub struct FeaturedProductsTable;

#[allow(clippy::too_many_arguments)]
fn featured(
    id: &str,
    name: &str,
    price: i64,
    original_price: Option<i64>,
    rating_tenths: i64,
    reviews: u32,
    category: &str,
    is_new: bool,
    image: &str,
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        price: Decimal::from(price),
        original_price: original_price.map(Decimal::from),
        rating: Decimal::new(rating_tenths, 1),
        reviews,
        category: category.to_string(),
        brand: "Lumakara".to_string(),
        in_stock: true,
        tags: vec![category.to_lowercase().replace(' ', "-")],
        is_new,
        image: image.to_string(),
    }
}

impl Fixture for FeaturedProductsTable {
    type Row = CatalogItem;

    fn rows() -> Vec<CatalogItem> {
        vec![
            featured(
                "featured-1",
                "Digital Art Collection - Neon Dreams",
                2500,
                Some(3200),
                48,
                124,
                "Digital Art",
                true,
                "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=400&h=400&fit=crop",
            ),
            featured(
                "featured-2",
                "Premium UI Component Library",
                4800,
                None,
                49,
                89,
                "Development",
                false,
                "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=400&h=400&fit=crop",
            ),
            featured(
                "featured-3",
                "Japanese Typography Pack",
                1800,
                None,
                47,
                156,
                "Typography",
                false,
                "https://images.unsplash.com/photo-1528459801416-a9e53bbf4e17?w=400&h=400&fit=crop",
            ),
            featured(
                "featured-4",
                "Minimalist Icon Collection",
                1200,
                Some(1600),
                46,
                203,
                "Icons",
                true,
                "https://images.unsplash.com/photo-1618556450991-2f1af64e8191?w=400&h=400&fit=crop",
            ),
        ]
    }
}
