// web_app/components/search.rs - Search-related UI components
//
// Every control here reads and writes one shared QueryDescriptor signal:
// - SearchBar: Text input with the suggestion dropdown
// - CategoryPicker / BrandSelect / PriceRangeFilter: The filter sidebar
// - FilterPanel: The sidebar as a whole, with "Clear All Filters"
// - SortDropdown: Sort key selector
// - ActiveFilters: Removable badges for the non-wildcard facets

use leptos::prelude::*;
use rust_decimal::Decimal;

use super::common::{OutlineButton, SelectString};
use crate::web_app::format::format_yen;
use crate::web_app::model::{FacetCount, FacetFilter, QueryDescriptor, SortOption};

/// Search bar with autocomplete suggestions
///
/// Suggestions come from the caller so the bar stays catalog-agnostic.
#[component]
pub fn SearchBar(
    /// The shared query descriptor
    query: RwSignal<QueryDescriptor>,
    /// Candidates for the current text
    #[prop(into)]
    suggestions: Signal<Vec<String>>,
) -> impl IntoView {
    let show_suggestions = RwSignal::new(false);
    let text = Signal::derive(move || query.with(|q| q.text.clone()));

    let pick = move |suggestion: String| {
        query.update(|q| q.apply_suggestion(&suggestion));
        show_suggestions.set(false);
    };

    view! {
        <div class="relative max-w-2xl mx-auto">
            <div class="relative">
                <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                    <span class="text-gray-400">"🔍"</span>
                </div>
                <input
                    type="text"
                    placeholder="Search products, brands, or categories..."
                    class="w-full pl-10 pr-4 py-3 border-2 border-gray-200 rounded-xl \
                           focus:ring-4 focus:ring-indigo-100 focus:border-indigo-500 \
                           outline-none text-lg transition-all shadow-sm"
                    prop:value=move || text.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.text = value);
                        show_suggestions.set(true);
                    }
                    on:focus=move |_| show_suggestions.set(true)
                    on:blur=move |_| {
                        // Let a click on a suggestion land before hiding the list
                        set_timeout(move || show_suggestions.set(false), std::time::Duration::from_millis(200));
                    }
                />
            </div>

            <Show when=move || show_suggestions.get() && suggestions.with(|s| !s.is_empty())>
                <div class="absolute top-full left-0 right-0 mt-2 bg-white border border-gray-200 \
                            rounded-lg shadow-lg z-10 max-h-60 overflow-y-auto">
                    <For
                        each=move || suggestions.get()
                        key=|suggestion| suggestion.clone()
                        children=move |suggestion| {
                            let picked = suggestion.clone();
                            view! {
                                <button
                                    type="button"
                                    class="w-full px-4 py-3 text-left hover:bg-gray-50 transition-colors \
                                           border-b border-gray-100 last:border-b-0 flex items-center gap-2"
                                    on:mousedown=move |_| pick(picked.clone())
                                >
                                    <span class="text-gray-400">"🔍"</span>
                                    <span class="text-gray-900">{suggestion}</span>
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

/// Category buttons, one per option, the selected one filled
///
/// Options present in the current results show their hit count.
#[component]
pub fn CategoryPicker(
    query: RwSignal<QueryDescriptor>,
    /// Options with "All" first
    categories: Vec<String>,
    /// Category facets of the current results
    #[prop(into)]
    counts: Signal<Vec<FacetCount>>,
) -> impl IntoView {
    view! {
        <div>
            <h3 class="font-semibold text-gray-900 mb-3">"Category"</h3>
            <div class="space-y-2">
                {categories.into_iter().map(|category| {
                    let filter = FacetFilter::from(category.as_str());
                    let selected_filter = filter.clone();
                    let is_selected = move || query.with(|q| q.category == selected_filter);
                    let facet_value = category.clone();
                    let count = move || {
                        counts.with(|facets| {
                            facets.iter().find(|f| f.value == facet_value).map(|f| f.count)
                        })
                    };
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_selected() {
                                    "w-full text-left px-3 py-1.5 rounded-lg text-sm font-medium bg-indigo-600 text-white shadow-sm"
                                } else {
                                    "w-full text-left px-3 py-1.5 rounded-lg text-sm font-medium bg-white border border-gray-200 \
                                     text-gray-700 hover:bg-gray-50"
                                }
                            }
                            on:click=move |_| {
                                let filter = filter.clone();
                                query.update(|q| q.category = filter);
                            }
                        >
                            {category}
                            {move || count().map(|n| view! {
                                <span class="ml-1 opacity-70">"(" {n} ")"</span>
                            })}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Brand dropdown
#[component]
pub fn BrandSelect(
    query: RwSignal<QueryDescriptor>,
    /// Options with "All" first
    brands: Vec<String>,
) -> impl IntoView {
    let selected = Signal::derive(move || query.with(|q| q.brand.to_string()));
    let on_change = Callback::new(move |brand: String| {
        query.update(|q| q.brand = FacetFilter::from(brand));
    });

    view! {
        <div>
            <h3 class="font-semibold text-gray-900 mb-3">"Brand"</h3>
            <SelectString value=selected options=brands on_change=on_change />
        </div>
    }
}

/// Price range slider pair
///
/// Two range inputs over `[0, ceiling]` in steps of 10, with the current
/// bounds printed underneath. Bounds may cross; that simply matches nothing.
#[component]
pub fn PriceRangeFilter(
    query: RwSignal<QueryDescriptor>,
    /// Upper end of both sliders
    ceiling: Decimal,
) -> impl IntoView {
    let min = Signal::derive(move || query.with(|q| q.price_range.min));
    let max = Signal::derive(move || query.with(|q| q.price_range.max));
    let ceiling_attr = ceiling.to_string();

    let parse_bound = move |value: String| value.parse::<Decimal>().ok();

    view! {
        <div>
            <h3 class="font-semibold text-gray-900 mb-3">"Price Range"</h3>
            <div class="space-y-4">
                <input
                    type="range"
                    min="0"
                    max=ceiling_attr.clone()
                    step="10"
                    class="w-full accent-indigo-600"
                    aria-label="Minimum price"
                    prop:value=move || min.get().to_string()
                    on:input=move |ev| {
                        if let Some(bound) = parse_bound(event_target_value(&ev)) {
                            query.update(|q| q.price_range.min = bound);
                        }
                    }
                />
                <input
                    type="range"
                    min="0"
                    max=ceiling_attr
                    step="10"
                    class="w-full accent-indigo-600"
                    aria-label="Maximum price"
                    prop:value=move || max.get().to_string()
                    on:input=move |ev| {
                        if let Some(bound) = parse_bound(event_target_value(&ev)) {
                            query.update(|q| q.price_range.max = bound);
                        }
                    }
                />
                <div class="flex items-center justify-between text-sm text-gray-500">
                    <span>{move || format_yen(min.get())}</span>
                    <span>{move || format_yen(max.get())}</span>
                </div>
            </div>
        </div>
    }
}

/// Complete filter panel component
///
/// Combines all filter components into a sidebar panel.
#[component]
pub fn FilterPanel(
    query: RwSignal<QueryDescriptor>,
    categories: Vec<String>,
    #[prop(into)]
    category_counts: Signal<Vec<FacetCount>>,
    brands: Vec<String>,
    ceiling: Decimal,
    /// Clear filters callback
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <aside class="bg-white p-6 rounded-2xl border border-gray-100 shadow-sm space-y-6 h-fit sticky top-24">
            <h2 class="text-xl font-semibold text-gray-900">"Filters"</h2>
            <CategoryPicker query=query categories=categories counts=category_counts />
            <BrandSelect query=query brands=brands />
            <PriceRangeFilter query=query ceiling=ceiling />
            <OutlineButton class="w-full" on_click=on_clear>
                "Clear All Filters"
            </OutlineButton>
        </aside>
    }
}

/// Sort dropdown component
///
/// Allows users to sort results by different criteria.
#[component]
pub fn SortDropdown(
    query: RwSignal<QueryDescriptor>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <label class="text-sm text-gray-500">"Sort by:"</label>
            <select
                class="text-sm font-semibold text-gray-800 bg-white border border-gray-200 rounded-lg \
                       px-3 py-2 cursor-pointer shadow-sm"
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<SortOption>() {
                        Ok(sort) => query.update(|q| q.sort_by = sort),
                        Err(e) => tracing::warn!("Ignoring sort selection: {}", e),
                    }
                }
            >
                {SortOption::ALL.into_iter().map(|option| {
                    view! {
                        <option
                            value=option.key()
                            selected=move || query.with(|q| q.sort_by == option)
                        >
                            {option.label()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Removable badges for the selected category and brand
#[component]
pub fn ActiveFilters(
    query: RwSignal<QueryDescriptor>,
) -> impl IntoView {
    let active = Memo::new(move |_| query.with(|q| q.active_filters()));

    view! {
        <div class="flex items-center gap-2 flex-wrap">
            <For
                each=move || active.get()
                key=|filter| filter.clone()
                children=move |filter| {
                    let label = filter.label().to_string();
                    view! {
                        <span class="flex items-center gap-1 px-2.5 py-1 text-xs font-medium rounded-full \
                                     bg-indigo-50 text-indigo-800 border border-indigo-200">
                            <span>{label}</span>
                            <button
                                type="button"
                                class="hover:text-indigo-950"
                                title="Remove filter"
                                on:click=move |_| query.update(|q| q.clear(&filter))
                            >
                                "×"
                            </button>
                        </span>
                    }
                }
            />
        </div>
    }
}
