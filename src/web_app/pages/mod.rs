// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - HomePage: Hero, features, and the featured products
// - SearchPage: Catalog search with filters and sorting
// - AdminPage: Back-office tabs over the mock tables
// - LoadingPage: Splash screen that redirects home

pub mod admin;
pub mod home;
pub mod loading;
pub mod search;

// Re-export page components
pub use admin::AdminPage;
pub use home::HomePage;
pub use loading::LoadingPage;
pub use search::SearchPage;
