// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Button, Badge, PriceTag, etc.)
// - layout.rs: Header, Footer, and the mobile BottomNav
// - search.rs: Search-related components (SearchBar, FilterPanel, etc.)
// - product.rs: Product display components (ProductCard, ResultsGrid)

pub mod common;
pub mod layout;
pub mod search;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use layout::*;
pub use search::*;
pub use product::*;
