// fixtures/tables/mod.rs
//
// One file per page that owns seed data:
// - products: the search page catalog and its picker option lists
// - featured: the home page showcase
// - admin: the back-office mock tables

pub mod admin;
pub mod featured;
pub mod products;

pub use admin::{ActivityTable, AdminProductsTable, AdminUsersTable, OrdersTable};
pub use featured::FeaturedProductsTable;
pub use products::SearchCatalogTable;
