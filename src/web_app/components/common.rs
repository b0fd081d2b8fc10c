// web_app/components/common.rs - Reusable UI components
//
// Small stateless pieces shared by every page. They receive all data via
// props and report user actions through callbacks.

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::web_app::format::{format_rating, format_yen, star_fill, MAX_STARS};

/// Primary button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 \
                      transition-colors font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type="button"
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Outlined button for secondary actions such as clearing filters
#[component]
pub fn OutlineButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                      transition-colors border border-gray-300 font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Star rating display
///
/// floor(rating) stars are filled, the rest of the five are grey.
#[component]
pub fn StarRating(
    rating: Decimal,
    /// Review count shown in parentheses, if any
    #[prop(optional)]
    reviews: Option<u32>,
) -> impl IntoView {
    let filled = star_fill(rating);

    view! {
        <div class="flex items-center gap-2" title=format!("Rating: {}", format_rating(rating))>
            <div class="flex items-center gap-0.5">
                {(0..MAX_STARS).map(|i| {
                    let class = if i < filled { "text-yellow-400 text-sm" } else { "text-gray-300 text-sm" };
                    view! { <span class=class>"★"</span> }
                }).collect_view()}
            </div>
            {reviews.map(|count| view! {
                <span class="text-xs text-gray-500">"(" {count} ")"</span>
            })}
        </div>
    }
}

/// Badge component
///
/// A small badge/tag for displaying labels.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    let class = match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-800 border border-blue-200",
        "yellow" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-yellow-100 text-yellow-800 border border-yellow-200",
        "purple" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-purple-100 text-purple-800 border border-purple-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    };

    view! {
        <span class=class>
            {children()}
        </span>
    }
}

/// Text input bound to a string signal
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                      focus:ring-2 focus:ring-indigo-500 focus:border-transparent \
                      outline-none transition-shadow shadow-sm";

    view! {
        <input
            type="text"
            placeholder=placeholder
            class=format!("{} {}", base_class, class)
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Select dropdown over string options
///
/// Each option's value doubles as its label.
#[component]
pub fn SelectString(
    /// The currently selected value
    value: Signal<String>,
    /// Available options
    options: Vec<String>,
    /// Called with the newly selected value
    on_change: Callback<String>,
) -> impl IntoView {
    let class = "w-full px-4 py-2 border border-gray-300 rounded-lg bg-white \
                 focus:ring-2 focus:ring-indigo-500 focus:border-transparent \
                 outline-none cursor-pointer shadow-sm";

    view! {
        <select
            class=class
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {options.into_iter().map(|option| {
                let opt_val = option.clone();
                view! {
                    <option
                        value=option.clone()
                        selected=move || value.get() == opt_val
                    >
                        {option}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

/// Price with the struck-through original when discounted
#[component]
pub fn PriceTag(
    price: Decimal,
    #[prop(default = None)]
    original_price: Option<Decimal>,
) -> impl IntoView {
    let original = original_price.filter(|original| *original > price);

    view! {
        <div class="flex items-center gap-2">
            <span class="font-bold text-lg text-gray-900">{format_yen(price)}</span>
            {original.map(|original| view! {
                <span class="text-sm text-gray-400 line-through">{format_yen(original)}</span>
            })}
        </div>
    }
}
