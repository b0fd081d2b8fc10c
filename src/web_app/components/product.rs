// web_app/components/product.rs - Product display components
//
// Components for displaying products including:
// - ProductCard: Grid card with New/Sale badges, favorite and cart actions
// - ProductGrid: Responsive grid of cards
// - ResultsGrid: Search results with the "no products" state

use leptos::prelude::*;

use super::common::{Button, OutlineButton, PriceTag, StarRating};
use crate::web_app::format::discount_percent;
use crate::web_app::model::CatalogItem;

/// Product card for grids
///
/// The favorite and cart buttons report the product id; the card itself
/// holds no state.
#[component]
pub fn ProductCard(
    /// The product to display
    item: CatalogItem,
    /// Whether the product is in the visitor's favorites
    #[prop(into)]
    is_favorite: Signal<bool>,
    on_add_to_cart: Callback<String>,
    on_toggle_favorite: Callback<String>,
) -> impl IntoView {
    let cart_id = item.id.clone();
    let favorite_id = item.id.clone();
    let sale = item
        .original_price
        .and_then(|original| discount_percent(item.price, original));

    view! {
        <div class="group bg-white rounded-xl shadow-sm hover:shadow-xl transition-all duration-300 \
                    border border-gray-100 flex flex-col h-full overflow-hidden transform hover:-translate-y-1">
            <div class="relative overflow-hidden aspect-square bg-gray-100">
                <img
                    src=item.image.clone()
                    alt=item.name.clone()
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />

                // Badges
                <div class="absolute top-3 left-3 flex flex-col gap-1">
                    {item.is_new.then(|| view! {
                        <span class="px-2 py-1 bg-indigo-600 text-white text-xs font-medium rounded-full">"New"</span>
                    })}
                    {sale.map(|percent| view! {
                        <span class="px-2 py-1 bg-red-600 text-white text-xs font-medium rounded-full" title=format!("{percent}% off")>
                            "Sale"
                        </span>
                    })}
                </div>

                <button
                    type="button"
                    class=move || {
                        if is_favorite.get() {
                            "absolute top-3 right-3 h-8 w-8 rounded-full bg-white/80 text-red-500"
                        } else {
                            "absolute top-3 right-3 h-8 w-8 rounded-full bg-white/80 text-gray-500 hover:text-red-500"
                        }
                    }
                    title="Toggle favorite"
                    on:click=move |_| on_toggle_favorite.run(favorite_id.clone())
                >
                    {move || if is_favorite.get() { "♥" } else { "♡" }}
                </button>

                <div class="absolute bottom-3 left-3 right-3 opacity-0 group-hover:opacity-100 transition-opacity">
                    <Button
                        class="w-full"
                        on_click=Callback::new(move |()| on_add_to_cart.run(cart_id.clone()))
                    >
                        "Add to Cart"
                    </Button>
                </div>
            </div>

            <div class="p-4 space-y-2 flex flex-col flex-1">
                <div class="text-xs text-gray-500 uppercase tracking-wide">{item.category.clone()}</div>
                <h3 class="font-semibold text-sm leading-tight line-clamp-2 text-gray-900">
                    {item.name.clone()}
                </h3>
                <StarRating rating=item.rating reviews=item.reviews />
                <PriceTag price=item.price original_price=item.original_price />
                {(!item.in_stock).then(|| view! {
                    <span class="text-xs px-2 py-1 bg-red-100 text-red-700 rounded-full font-medium w-fit">
                        "Out of Stock"
                    </span>
                })}
            </div>
        </div>
    }
}

/// Responsive grid of product cards bound to the session's favorites
#[component]
pub fn ProductGrid(
    #[prop(into)]
    items: Signal<Vec<CatalogItem>>,
    /// Ids currently favorited
    #[prop(into)]
    favorites: Signal<Vec<String>>,
    on_add_to_cart: Callback<String>,
    on_toggle_favorite: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
            <For
                each=move || items.get()
                key=|item| item.id.clone()
                children=move |item| {
                    let id = item.id.clone();
                    let is_favorite = Signal::derive(move || favorites.with(|ids| ids.contains(&id)));
                    view! {
                        <ProductCard
                            item=item
                            is_favorite=is_favorite
                            on_add_to_cart=on_add_to_cart
                            on_toggle_favorite=on_toggle_favorite
                        />
                    }
                }
            />
        </div>
    }
}

/// Search results, or the "no products" state with a reset action
#[component]
pub fn ResultsGrid(
    #[prop(into)]
    items: Signal<Vec<CatalogItem>>,
    #[prop(into)]
    favorites: Signal<Vec<String>>,
    on_add_to_cart: Callback<String>,
    on_toggle_favorite: Callback<String>,
    /// Clears every filter
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <Show
            when=move || items.with(|items| !items.is_empty())
            fallback=move || view! {
                <div class="text-center py-12">
                    <div class="bg-white p-8 rounded-2xl shadow-sm border border-gray-100 inline-block">
                        <div class="text-6xl mb-4 opacity-50">"🔍"</div>
                        <h3 class="text-xl font-semibold text-gray-900 mb-2">"No products found"</h3>
                        <p class="text-gray-500 mb-4">"Try adjusting your search criteria or filters"</p>
                        <OutlineButton on_click=on_reset>"Clear Filters"</OutlineButton>
                    </div>
                </div>
            }
        >
            <ProductGrid
                items=items
                favorites=favorites
                on_add_to_cart=on_add_to_cart
                on_toggle_favorite=on_toggle_favorite
            />
        </Show>
    }
}
