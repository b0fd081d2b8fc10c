// Lumakara storefront server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - The catalog and settings from the environment
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use lumakara_store::web_app::app::{shell, App as WebApp};
    use lumakara_store::web_app::catalog::{self, Catalog};
    use lumakara_store::web_app::config::{self, StorefrontConfig};
    use tracing_subscriber::EnvFilter;

    // Load environment variables before anything reads them
    dotenv::dotenv().ok();

    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let storefront = StorefrontConfig::from_env()?;
    if let Some(path) = &storefront.catalog_path {
        let loaded = Catalog::load(path)?;
        tracing::info!("Loaded {} products from {}", loaded.len(), path.display());
        catalog::init(loaded);
    } else {
        tracing::info!("Serving the built-in catalog ({} products)", catalog::get().len());
    }
    let ceiling = storefront.price_ceiling_for(catalog::get());
    if ceiling > storefront.price_ceiling {
        tracing::warn!(
            "Catalog prices go up to {}, above the configured ceiling {}; the price filter will span [0, {}]",
            ceiling,
            storefront.price_ceiling,
            ceiling
        );
    }
    config::init(storefront);

    // Leptos configuration
    let conf = leptos_config::get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options = leptos_options.clone();
        let site_root_str = site_root.to_string();

        App::new()
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with the storefront shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            // Everything else under the site root (placeholder images, favicon)
            .service(Files::new("/", site_root_str.as_str()))
            .app_data(web::Data::new(leptos_options))
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("The storefront server is built with the 'ssr' feature: cargo leptos watch");
}
