// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the per-tab session, and the page shell.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::{AdminPage, HomePage, LoadingPage, SearchPage};
use crate::web_app::session::Session;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - The visitor's session, shared through context
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    let session = RwSignal::new(Session::new());
    provide_context(session);

    view! {
        <Title text="Lumakara Store" />
        <Meta name="description" content="Premium digital products crafted with Japanese attention to detail" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/lumakara_store.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/search") view=SearchPage />
                <Route path=path!("/admin") view=AdminPage />
                <Route path=path!("/loading") view=LoadingPage />
            </Routes>
        </Router>
    }
}

/// The session provided by `App`
///
/// Outside `App` (isolated component renders) a throwaway session is
/// returned so the caller still works.
pub fn use_session() -> RwSignal<Session> {
    use_context::<RwSignal<Session>>().unwrap_or_else(|| {
        tracing::warn!("No session in context, using a detached one");
        RwSignal::new(Session::new())
    })
}

/// Cart and favorite handlers bound to the current session
#[derive(Clone, Copy)]
pub struct SessionActions {
    pub add_to_cart: Callback<String>,
    pub toggle_favorite: Callback<String>,
    /// Favorited ids, for highlighting hearts
    pub favorites: Signal<Vec<String>>,
}

pub fn use_session_actions() -> SessionActions {
    let session = use_session();
    SessionActions {
        add_to_cart: Callback::new(move |id: String| {
            session.update(|s| {
                s.add_to_cart(&id);
            });
        }),
        toggle_favorite: Callback::new(move |id: String| {
            session.update(|s| {
                s.toggle_favorite(&id);
            });
        }),
        favorites: Signal::derive(move || {
            session.with(|s| s.favorites().map(str::to_string).collect())
        }),
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors"
                >
                    "Back to the Store"
                </a>
            </div>
        </div>
    }
}

/// HTML shell rendered around `App` on the server
///
/// Besides the hydration scripts it embeds the catalog and config the
/// server is running with, which the hydrate entry point installs before
/// mounting.
#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    use crate::web_app::bootstrap::{ClientBootstrap, BOOTSTRAP_ELEMENT_ID};

    let bootstrap = match ClientBootstrap::current().to_script_json() {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::error!("Failed to serialize storefront bootstrap: {}", e);
            None
        }
    };

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options />
                // In <head> so the hydration walk over <body> starts at App
                {bootstrap.map(|json| view! {
                    <script type="application/json" id=BOOTSTRAP_ELEMENT_ID inner_html=json></script>
                })}
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::web_app::bootstrap::BOOTSTRAP_ELEMENT_ID;
    use leptos_router::location::RequestUrl;

    fn render_shell() -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new("/"));
            let options = LeptosOptions::builder().output_name("lumakara_store").build();
            shell(options).to_html()
        })
    }

    #[test]
    fn test_bootstrap_payload_stays_out_of_body() {
        let html = render_shell();
        let head_end = html.find("</head>").unwrap();
        let payload = html.find(BOOTSTRAP_ELEMENT_ID).unwrap();
        assert!(payload < head_end);

        let body = &html[html.find("<body").unwrap()..];
        assert!(!body.contains(BOOTSTRAP_ELEMENT_ID));
        assert!(!body.contains("application/json"));
    }
}
