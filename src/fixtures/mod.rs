// fixtures/mod.rs - Seed data module
//
// The storefront has no backend: every product, user, and order shown in
// the UI is defined here once and reused by the pages and the tests.
//
// Each seed table is a unit struct implementing `Fixture`, so callers ask
// for rows by type:
//
//   let catalog = SearchCatalogTable::rows();
//   let orders = OrdersTable::rows();

pub mod tables;

pub use tables::{
    ActivityTable, AdminProductsTable, AdminUsersTable, FeaturedProductsTable, OrdersTable,
    SearchCatalogTable,
};

/// A table of hardcoded rows
pub trait Fixture {
    type Row;

    /// The rows in display order
    fn rows() -> Vec<Self::Row>;
}
