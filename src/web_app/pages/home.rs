// web_app/pages/home.rs - Landing page
//
// Hero with headline stats, the four selling points, and the featured
// products. Cart and favorite clicks go to the shared session.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::fixtures::{FeaturedProductsTable, Fixture};
use crate::web_app::app::use_session_actions;
use crate::web_app::components::*;
use crate::web_app::splash::SplashParticle;

const HERO_STATS: [(&str, &str); 4] = [
    ("1000+", "Premium Products"),
    ("50K+", "Happy Customers"),
    ("4.9★", "Average Rating"),
    ("120+", "Countries Served"),
];

const FEATURES: [(&str, &str, &str); 4] = [
    ("⭐", "Premium Quality", "Handpicked products that meet the highest standards"),
    ("⚡", "Instant Download", "Get your digital products immediately after purchase"),
    ("🛡", "Secure & Safe", "Advanced security measures protect your data"),
    ("🌐", "Global Support", "Multi-language support and worldwide delivery"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let actions = use_session_actions();
    let featured = Signal::derive(FeaturedProductsTable::rows);

    view! {
        <div class="min-h-screen bg-white relative">
            <div class="fixed inset-0 pointer-events-none opacity-40" aria-hidden="true">
                {SplashParticle::star_field().into_iter().map(|particle| view! {
                    <div class="absolute w-1 h-1 bg-indigo-300 rounded-full animate-pulse" style=particle.style()></div>
                }).collect_view()}
            </div>

            <Header />

            // Hero
            <section class="relative py-20 md:py-32 overflow-hidden">
                <div class="max-w-4xl mx-auto px-4 text-center space-y-8 relative z-10">
                    <div class="space-y-4">
                        <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold leading-tight">
                            "Discover " <span class="text-indigo-600">"Premium"</span>
                            <br />
                            "Digital Products"
                        </h1>
                        <p class="text-lg md:text-xl text-gray-500 max-w-2xl mx-auto leading-relaxed">
                            "Curated collection of high-quality digital assets, tools, and experiences \
                             crafted with Japanese attention to detail."
                        </p>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                        <A
                            href="/search"
                            attr:class="px-6 py-3 bg-gradient-to-r from-indigo-600 to-purple-600 text-white rounded-lg \
                                        font-medium hover:scale-105 transition-transform"
                        >
                            "Explore Collection →"
                        </A>
                        <A
                            href="/loading"
                            attr:class="px-6 py-3 border border-gray-300 rounded-lg font-medium hover:bg-gray-50"
                        >
                            "Watch Demo"
                        </A>
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-4 gap-8 mt-16">
                        {HERO_STATS.into_iter().map(|(value, label)| view! {
                            <div class="text-center space-y-1">
                                <div class="text-2xl md:text-3xl font-bold text-indigo-600">{value}</div>
                                <div class="text-sm text-gray-500">{label}</div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Features
            <section class="py-20 border-t border-gray-100">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center space-y-4 mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold">
                            "Why Choose " <span class="text-indigo-600">"Lumakara"</span> "?"
                        </h2>
                        <p class="text-gray-500 text-lg">
                            "Experience the perfect blend of Japanese craftsmanship and modern technology."
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {FEATURES.into_iter().map(|(icon, title, description)| view! {
                            <div class="group p-6 text-center space-y-4 bg-white rounded-xl border border-gray-100 \
                                        hover:shadow-xl transition-all duration-300 hover:-translate-y-1">
                                <div class="w-12 h-12 rounded-lg bg-indigo-100 flex items-center justify-center mx-auto \
                                            text-2xl group-hover:scale-110 transition-transform">
                                    {icon}
                                </div>
                                <h3 class="font-semibold text-lg">{title}</h3>
                                <p class="text-gray-500 text-sm leading-relaxed">{description}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Featured products
            <section class="py-20 border-t border-gray-100">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-12">
                        <div class="space-y-2">
                            <h2 class="text-3xl md:text-4xl font-bold">
                                "Featured " <span class="text-indigo-600">"Products"</span>
                            </h2>
                            <p class="text-gray-500">"Discover our most popular and trending digital products"</p>
                        </div>
                        <A
                            href="/search"
                            attr:class="mt-4 md:mt-0 px-4 py-2 border border-gray-300 rounded-lg font-medium hover:bg-gray-50"
                        >
                            "View All Products →"
                        </A>
                    </div>
                    <ProductGrid
                        items=featured
                        favorites=actions.favorites
                        on_add_to_cart=actions.add_to_cart
                        on_toggle_favorite=actions.toggle_favorite
                    />
                </div>
            </section>

            <Footer />
            <BottomNav active="Home" />
        </div>
    }
}
