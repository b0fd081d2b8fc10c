// web_app/mod.rs - Root module for the storefront application
//
// Architecture:
// - model/: Shared data types (catalog items, query descriptor, admin rows)
// - catalog.rs: The static, process-wide catalog holder
// - bootstrap.rs: Ships the server's catalog and config to the browser
// - query.rs: The product search/filter/sort pipeline (pure functions)
// - session.rs: Per-session cart, favorites, and login flag
// - splash.rs: Loading splash progress counter and particle layout
// - admin.rs: Admin dashboard helpers over the mock tables
// - format.rs: Display formatting shared by the components
// - config.rs / error.rs: Environment configuration and error types
// - components/, pages/, app.rs: Leptos UI (ssr and hydrate only)

pub mod model;

pub mod admin;
pub mod bootstrap;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod query;
pub mod session;
pub mod splash;

// The UI is compiled for both the server (SSR) and the browser (hydrate)
cfg_if::cfg_if! {
    if #[cfg(any(feature = "ssr", feature = "hydrate"))] {
        pub mod app;
        pub mod components;
        pub mod pages;

        // Re-export main app component for convenience
        pub use app::App;
    }
}
