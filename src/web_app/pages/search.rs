// web_app/pages/search.rs - Search page component
//
// The main search page that composes all search-related components
// and owns the query descriptor for this visit.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::web_app::app::use_session_actions;
use crate::web_app::components::*;
use crate::web_app::model::{CatalogItem, QueryDescriptor};
use crate::web_app::{catalog, config, query};

/// Main search page component
///
/// Orchestrates the search experience with:
/// - Search bar with suggestions, seeded from `?q=`
/// - Filter panel and active filter badges
/// - Sort dropdown
/// - Results grid with its "no products" state
///
/// Every change to the descriptor re-evaluates the query synchronously.
#[component]
pub fn SearchPage() -> impl IntoView {
    let catalog = catalog::get();
    let config = config::get();
    let actions = use_session_actions();
    let ceiling = config.price_ceiling_for(catalog);

    // Header searches arrive as ?q=
    let params = use_query_map();
    let initial_text = params.with_untracked(|p| p.get("q")).unwrap_or_default();
    let query = RwSignal::new(QueryDescriptor {
        text: initial_text,
        ..QueryDescriptor::with_price_ceiling(ceiling)
    });

    Effect::new(move |_| {
        if let Some(text) = params.with(|p| p.get("q")) {
            query.update(|q| q.text = text);
        }
    });

    let results = Memo::new(move |_| query.with(|q| query::search(catalog.items(), q)));

    let items = Signal::derive(move || {
        results.with(|r| r.items.iter().map(|&item| item.clone()).collect::<Vec<CatalogItem>>())
    });
    let category_counts = Signal::derive(move || results.with(|r| r.category_facets.clone()));
    let summary = move || {
        let count = results.with(|r| r.total_count);
        query.with(|q| query::results_summary(count, &q.text))
    };
    let suggestions = Signal::derive(move || query.with(|q| query::suggest(catalog.items(), &q.text)));

    // Clear filters callback
    let on_clear_filters = Callback::new(move |()| {
        query.update(|q| q.reset_filters_within(config.default_price_range(catalog)));
    });

    let show_filters = RwSignal::new(false);

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <Header />

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 pb-20 md:pb-8">
                // Search header
                <section class="mb-8 space-y-6">
                    <div class="text-center space-y-2">
                        <h1 class="text-4xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-indigo-600 to-purple-500">
                            "Discover Products"
                        </h1>
                        <p class="text-gray-500">
                            "Find exactly what you're looking for with our advanced search"
                        </p>
                    </div>
                    <SearchBar query=query suggestions=suggestions />
                </section>

                // Filters bar
                <div class="flex items-center justify-between mb-6 flex-wrap gap-4">
                    <div class="flex items-center gap-4 flex-wrap">
                        <OutlineButton
                            class="md:hidden"
                            on_click=Callback::new(move |()| show_filters.update(|open| *open = !*open))
                        >
                            "Filters"
                        </OutlineButton>
                        <ActiveFilters query=query />
                    </div>
                    <SortDropdown query=query />
                </div>

                <div class="flex flex-col md:flex-row gap-8 items-start">
                    <div
                        class="w-full md:w-80 flex-shrink-0 md:block"
                        class:hidden=move || !show_filters.get()
                    >
                        <FilterPanel
                            query=query
                            categories=catalog.categories()
                            category_counts=category_counts
                            brands=catalog.brands()
                            ceiling=ceiling
                            on_clear=on_clear_filters
                        />
                    </div>

                    <section class="flex-1 w-full min-w-0">
                        <p class="text-gray-500 mb-6">{summary}</p>
                        <ResultsGrid
                            items=items
                            favorites=actions.favorites
                            on_add_to_cart=actions.add_to_cart
                            on_toggle_favorite=actions.toggle_favorite
                            on_reset=on_clear_filters
                        />
                    </section>
                </div>
            </main>

            <Footer />
            <BottomNav active="Search" />
        </div>
    }
}
