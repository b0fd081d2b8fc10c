// lib.rs - Root module for the Lumakara storefront library
//
// The library is split in two:
// - fixtures: the in-memory seed data (search catalog, featured products,
//   admin mock tables)
// - web_app: the query pipeline, session state, and the Leptos UI

/// The fixtures module contains the hardcoded storefront data
pub mod fixtures;

/// Query pipeline, session state, and (behind features) the UI
pub mod web_app;

/// WASM entry point used by cargo-leptos for client-side hydration
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::bootstrap::{ClientBootstrap, BOOTSTRAP_ELEMENT_ID};
    use crate::web_app::App;

    console_error_panic_hook::set_once();

    // Install the server's catalog before any page evaluates a query
    let payload = leptos::prelude::document()
        .get_element_by_id(BOOTSTRAP_ELEMENT_ID)
        .and_then(|element| element.text_content());
    match payload.map(|json| ClientBootstrap::from_json(&json).and_then(ClientBootstrap::install)) {
        Some(Ok(())) => {}
        Some(Err(e)) => leptos::logging::warn!("Ignoring storefront bootstrap: {e}"),
        None => leptos::logging::warn!("No storefront bootstrap found, using the built-in catalog"),
    }

    leptos::mount::hydrate_body(App);
}
