// web_app/pages/admin.rs - Back-office dashboard at /admin
//
// Four tabs over the mock tables. `?tab=products` (etc.) opens a tab
// directly. Nothing here is editable; the row action buttons are inert.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::fixtures::tables::admin::{activity_reference_time, dashboard_stats};
use crate::fixtures::{ActivityTable, AdminProductsTable, AdminUsersTable, Fixture, OrdersTable};
use crate::web_app::admin::{filter_admin_products, overview_cards, relative_time, StatusBadge};
use crate::web_app::components::{Badge, Header, TextInput};
use crate::web_app::format::format_yen;
use crate::web_app::model::admin::AdminTab;

#[component]
pub fn AdminPage() -> impl IntoView {
    let params = use_query_map();
    let initial = params
        .with_untracked(|p| p.get("tab"))
        .map(|key| {
            key.parse::<AdminTab>().unwrap_or_else(|e| {
                tracing::warn!("Opening the default admin tab: {}", e);
                AdminTab::default()
            })
        })
        .unwrap_or_default();
    let active_tab = RwSignal::new(initial);

    view! {
        <div class="min-h-screen bg-gray-50">
            <Header />
            <div class="max-w-7xl mx-auto px-4 py-8 pb-24 md:pb-8">
                <div class="mb-8">
                    <h1 class="text-4xl font-bold text-indigo-600 mb-2">"Admin Dashboard"</h1>
                    <p class="text-gray-500">"Manage your store efficiently"</p>
                </div>

                <nav class="flex space-x-1 mb-8 bg-white/50 p-1 rounded-lg border border-gray-200">
                    {AdminTab::ALL.into_iter().map(|tab| view! {
                        <button
                            type="button"
                            class=move || {
                                if active_tab.get() == tab {
                                    "px-4 py-2 rounded-md font-medium bg-indigo-600 text-white shadow-sm"
                                } else {
                                    "px-4 py-2 rounded-md font-medium text-gray-500 hover:text-gray-900 hover:bg-gray-100"
                                }
                            }
                            on:click=move |_| active_tab.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }).collect_view()}
                </nav>

                {move || match active_tab.get() {
                    AdminTab::Overview => view! { <OverviewTab /> }.into_any(),
                    AdminTab::Products => view! { <ProductsTab /> }.into_any(),
                    AdminTab::Users => view! { <UsersTab /> }.into_any(),
                    AdminTab::Orders => view! { <OrdersTab /> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Card wrapping a table or list
#[component]
fn Panel(
    #[prop(optional)]
    title: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm overflow-hidden">
            {title.map(|title| view! {
                <h2 class="px-6 pt-6 pb-2 text-lg font-semibold">{title}</h2>
            })}
            <div class="p-6 overflow-x-auto">{children()}</div>
        </div>
    }
}

#[component]
fn TableHead(columns: &'static [&'static str]) -> impl IntoView {
    view! {
        <thead>
            <tr class="text-left text-sm text-gray-500 border-b border-gray-200">
                {columns.iter().map(|column| view! { <th class="py-2 pr-4 font-medium">{*column}</th> }).collect_view()}
            </tr>
        </thead>
    }
}

#[component]
fn OverviewTab() -> impl IntoView {
    let now = activity_reference_time();

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {overview_cards(&dashboard_stats()).into_iter().map(|card| view! {
                    <div class="bg-white rounded-xl border border-gray-200 p-6">
                        <p class="text-sm text-gray-500 mb-1">{card.title}</p>
                        <p class="text-2xl font-bold">{card.value}</p>
                    </div>
                }).collect_view()}
            </div>

            <Panel title="Recent Activity">
                <div class="space-y-4">
                    {ActivityTable::rows().into_iter().map(|entry| view! {
                        <div class="flex items-center justify-between py-2 border-b border-gray-100 last:border-b-0">
                            <div>
                                <p class="font-medium">{entry.action}</p>
                                <p class="text-sm text-gray-500">{entry.actor}</p>
                            </div>
                            <span class="text-sm text-gray-500">{relative_time(now, entry.at)}</span>
                        </div>
                    }).collect_view()}
                </div>
            </Panel>
        </div>
    }
}

#[component]
fn ProductsTab() -> impl IntoView {
    let rows = StoredValue::new(AdminProductsTable::rows());
    let search_term = RwSignal::new(String::new());

    let visible = move || {
        let term = search_term.get();
        rows.with_value(|rows| {
            filter_admin_products(rows, &term)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row gap-4 justify-between items-start sm:items-center">
                <div class="flex-1 max-w-md">
                    <TextInput value=search_term placeholder="Search products..." />
                </div>
                <button type="button" class="px-4 py-2 bg-purple-600 text-white rounded-lg font-medium">
                    "+ Add Product"
                </button>
            </div>

            <Panel>
                <table class="w-full">
                    <TableHead columns=&["Product", "Category", "Price", "Stock", "Status", "Actions"] />
                    <tbody>
                        <For
                            each=visible
                            key=|product| product.id.clone()
                            children=|product| view! {
                                <tr class="border-b border-gray-100 text-sm">
                                    <td class="py-3 pr-4 font-medium">{product.name}</td>
                                    <td class="py-3 pr-4">{product.category}</td>
                                    <td class="py-3 pr-4">{format_yen(product.price)}</td>
                                    <td class="py-3 pr-4">{product.stock}</td>
                                    <td class="py-3 pr-4">
                                        <Badge variant=product.status.tone().badge_variant()>
                                            {product.status.label()}
                                        </Badge>
                                    </td>
                                    <td class="py-3 pr-4 space-x-2 text-gray-500">
                                        <button type="button" title="View">"👁"</button>
                                        <button type="button" title="Edit">"✎"</button>
                                        <button type="button" title="Delete" class="text-red-600">"🗑"</button>
                                    </td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </Panel>
        </div>
    }
}

#[component]
fn UsersTab() -> impl IntoView {
    view! {
        <Panel title="User Management">
            <table class="w-full">
                <TableHead columns=&["Name", "Email", "Role", "Join Date", "Orders", "Actions"] />
                <tbody>
                    {AdminUsersTable::rows().into_iter().map(|user| view! {
                        <tr class="border-b border-gray-100 text-sm">
                            <td class="py-3 pr-4 font-medium">{user.name}</td>
                            <td class="py-3 pr-4">{user.email}</td>
                            <td class="py-3 pr-4">
                                <Badge variant=user.role.tone().badge_variant()>{user.role.label()}</Badge>
                            </td>
                            <td class="py-3 pr-4">{user.join_date.format("%Y-%m-%d").to_string()}</td>
                            <td class="py-3 pr-4">{user.orders}</td>
                            <td class="py-3 pr-4 space-x-2 text-gray-500">
                                <button type="button" title="View">"👁"</button>
                                <button type="button" title="Edit">"✎"</button>
                            </td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </Panel>
    }
}

#[component]
fn OrdersTab() -> impl IntoView {
    view! {
        <Panel title="Order Management">
            <table class="w-full">
                <TableHead columns=&["Order ID", "Customer", "Total", "Status", "Date", "Items", "Actions"] />
                <tbody>
                    {OrdersTable::rows().into_iter().map(|order| view! {
                        <tr class="border-b border-gray-100 text-sm">
                            <td class="py-3 pr-4 font-medium">"#" {order.id}</td>
                            <td class="py-3 pr-4">{order.customer}</td>
                            <td class="py-3 pr-4">{format_yen(order.total)}</td>
                            <td class="py-3 pr-4">
                                <Badge variant=order.status.tone().badge_variant()>{order.status.label()}</Badge>
                            </td>
                            <td class="py-3 pr-4">{order.date.format("%Y-%m-%d").to_string()}</td>
                            <td class="py-3 pr-4">{order.items}</td>
                            <td class="py-3 pr-4 text-gray-500">
                                <button type="button" title="View">"👁"</button>
                            </td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </Panel>
    }
}
