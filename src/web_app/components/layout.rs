// web_app/components/layout.rs - Page chrome shared by the storefront pages
//
// - Header: logo, quick search, cart badge, login toggle
// - Footer: brand blurb and link columns
// - BottomNav: tab bar shown on small screens

use leptos::prelude::*;
use leptos_router::components::{Form, A};

use crate::web_app::app::use_session;
use crate::web_app::format::cart_badge;

/// The round "L" mark next to the wordmark
#[component]
fn LogoMark(
    #[prop(default = "w-8 h-8 text-sm")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "{} rounded-full bg-gradient-to-br from-indigo-500 to-purple-600 flex items-center justify-center",
            size,
        )>
            <span class="text-white font-bold">"L"</span>
        </div>
    }
}

/// Sticky site header
///
/// The search box submits a plain GET to `/search?q=...`, so it also works
/// before hydration.
#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let menu_open = RwSignal::new(false);
    let badge = Memo::new(move |_| session.with(|s| cart_badge(s.cart_item_count())));
    let logged_in = Memo::new(move |_| session.with(|s| s.is_logged_in()));

    view! {
        <header class="sticky top-0 z-50 w-full border-b border-gray-200 bg-white/80 backdrop-blur">
            <div class="max-w-7xl mx-auto px-4 h-16 flex items-center">
                <button
                    type="button"
                    class="md:hidden mr-2 p-2 rounded-lg hover:bg-gray-100"
                    title="Menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>

                <A href="/" attr:class="flex items-center space-x-2 mr-4">
                    <LogoMark />
                    <span class="font-bold text-xl text-indigo-600 hidden sm:block">"Lumakara"</span>
                </A>

                <div class="flex-1 max-w-sm mx-4">
                    <Form method="GET" action="/search">
                        <div class="relative">
                            <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400 text-sm">"🔍"</span>
                            <input
                                type="search"
                                name="q"
                                placeholder="Search products..."
                                class="w-full pl-10 pr-3 py-2 rounded-lg bg-gray-100 border-none \
                                       focus:bg-gray-200 outline-none transition-colors"
                            />
                        </div>
                    </Form>
                </div>

                <div class="flex items-center space-x-2">
                    <button type="button" class="relative p-2 rounded-lg hover:bg-gray-100" title="Cart">
                        "🛒"
                        {move || badge.get().map(|count| view! {
                            <span class="absolute -top-1 -right-1 bg-indigo-600 text-white text-xs rounded-full \
                                         h-5 w-5 flex items-center justify-center">
                                {count}
                            </span>
                        })}
                    </button>
                    <A href="/admin" attr:class="p-2 rounded-lg hover:bg-gray-100" attr:title="Account">
                        "👤"
                    </A>
                    <button
                        type="button"
                        class="p-2 rounded-lg hover:bg-gray-100 text-sm font-medium"
                        on:click=move |_| session.update(|s| {
                            s.toggle_login();
                        })
                    >
                        {move || if logged_in.get() { "Log out" } else { "Log in" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="md:hidden border-t border-gray-200 bg-white px-4 py-3 flex flex-col gap-2 text-sm">
                    <A href="/">"Home"</A>
                    <A href="/search">"Search"</A>
                    <A href="/admin">"Admin"</A>
                </nav>
            </Show>
        </header>
    }
}

#[component]
fn FooterLinks(title: &'static str, links: [&'static str; 4]) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h3 class="font-semibold">{title}</h3>
            <ul class="space-y-2 text-sm">
                {links.into_iter().map(|label| view! {
                    <li><a href="#" class="text-gray-500 hover:text-gray-900 transition-colors">{label}</a></li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-200 bg-gray-50 mt-20">
            <div class="max-w-7xl mx-auto px-4 py-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div class="space-y-4">
                        <div class="flex items-center space-x-2">
                            <LogoMark />
                            <span class="font-bold text-xl text-indigo-600">"Lumakara"</span>
                        </div>
                        <p class="text-gray-500 text-sm leading-relaxed">
                            "Premium digital products and experiences crafted with Japanese attention to detail."
                        </p>
                    </div>
                    <FooterLinks title="Quick Links" links=["About", "FAQ", "Support", "Contact"] />
                    <FooterLinks
                        title="Legal"
                        links=["Privacy Policy", "Terms of Service", "Cookie Policy", "Refund Policy"]
                    />
                </div>

                <div class="border-t border-gray-200 mt-8 pt-8 text-center text-sm text-gray-500">
                    <p>"© 2024 Lumakara Store. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}

/// Mobile tab bar
///
/// The last tab reads "Join" until the visitor logs in, then "Profile";
/// either way it flips the login flag.
#[component]
pub fn BottomNav(
    /// Label of the tab for the current page
    #[prop(default = "Home")]
    active: &'static str,
) -> impl IntoView {
    let session = use_session();
    let logged_in = Memo::new(move |_| session.with(|s| s.is_logged_in()));

    let tab_class = move |label: &str| {
        if label == active {
            "flex flex-col items-center gap-1 py-2 px-3 text-indigo-600"
        } else {
            "flex flex-col items-center gap-1 py-2 px-3 text-gray-500"
        }
    };

    view! {
        <nav class="md:hidden fixed bottom-0 left-0 right-0 z-50 bg-white/90 backdrop-blur border-t border-gray-200">
            <div class="flex items-center justify-around">
                <A href="/" attr:class=tab_class("Home")>
                    <span>"🏠"</span>
                    <span class="text-xs">"Home"</span>
                </A>
                <A href="/search" attr:class=tab_class("Search")>
                    <span>"🔍"</span>
                    <span class="text-xs">"Search"</span>
                </A>
                <button type="button" class=tab_class("Cart")>
                    <span>"🛒"</span>
                    <span class="text-xs">"Cart"</span>
                </button>
                <button
                    type="button"
                    class=tab_class("Profile")
                    on:click=move |_| session.update(|s| {
                        s.toggle_login();
                    })
                >
                    <span>{move || if logged_in.get() { "👤" } else { "➕" }}</span>
                    <span class="text-xs">{move || if logged_in.get() { "Profile" } else { "Join" }}</span>
                </button>
            </div>
        </nav>
    }
}
