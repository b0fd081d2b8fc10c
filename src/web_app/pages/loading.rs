// web_app/pages/loading.rs - Splash screen at /loading
//
// Progress climbs by the configured step on a fixed interval. Once it
// completes the interval is cleared and the visitor is sent home.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::time::Duration;

use crate::web_app::config;
use crate::web_app::splash::{
    floating_ring_style, SplashParticle, SplashProgress, SplashState, FEATURE_HIGHLIGHTS,
    FLOATING_RINGS, NAVIGATE_DELAY_MS,
};

#[component]
pub fn LoadingPage() -> impl IntoView {
    let config = config::get();
    let progress = RwSignal::new(SplashProgress::new(config.splash_step));
    let timer = StoredValue::new(None::<IntervalHandle>);
    let navigate = use_navigate();

    // Timers only exist in the browser; effects never run on the server
    Effect::new(move |_| {
        if timer.with_value(Option::is_some) {
            return;
        }
        let navigate = navigate.clone();
        let handle = set_interval_with_handle(
            move || {
                let mut next = progress.get_untracked();
                let state = next.tick();
                progress.set(next);

                if state == SplashState::Complete {
                    if let Some(handle) = timer.try_update_value(Option::take).flatten() {
                        handle.clear();
                    }
                    let navigate = navigate.clone();
                    set_timeout(
                        move || navigate("/", Default::default()),
                        Duration::from_millis(NAVIGATE_DELAY_MS.into()),
                    );
                }
            },
            Duration::from_millis(config.splash_interval_ms),
        );
        match handle {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(e) => tracing::warn!("Could not start splash timer: {:?}", e),
        }
    });

    on_cleanup(move || {
        if let Some(handle) = timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-purple-900 via-blue-900 to-indigo-900 flex flex-col \
                    items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0 opacity-30">
                {SplashParticle::star_field().into_iter().map(|particle| view! {
                    <div class="absolute w-1 h-1 bg-white rounded-full animate-pulse" style=particle.style()></div>
                }).collect_view()}
            </div>

            <div class="relative z-10 text-center space-y-8">
                <div class="flex flex-col items-center space-y-4">
                    <div class="w-20 h-20 rounded-full bg-gradient-to-br from-indigo-500 to-purple-600 flex \
                                items-center justify-center animate-pulse">
                        <span class="text-white font-bold text-3xl">"L"</span>
                    </div>
                    <div class="space-y-2">
                        <h1 class="text-4xl md:text-6xl font-bold text-white">"Lumakara"</h1>
                        <p class="text-lg text-white/80">"ルマカラストア"</p>
                    </div>
                </div>

                <div class="w-64 mx-auto space-y-4">
                    <div class="w-full bg-white/20 rounded-full h-2 overflow-hidden">
                        <div
                            class="h-full bg-gradient-to-r from-indigo-400 to-purple-400 transition-all duration-300 ease-out"
                            style=move || progress.with(SplashProgress::bar_style)
                        ></div>
                    </div>
                    <div class="text-white/60 text-sm">{move || progress.with(SplashProgress::label)}</div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 max-w-2xl mx-auto">
                    {FEATURE_HIGHLIGHTS.into_iter().map(|(title, subtitle)| view! {
                        <div class="text-center space-y-1">
                            <div class="text-white font-medium">{title}</div>
                            <div class="text-white/60 text-sm">{subtitle}</div>
                        </div>
                    }).collect_view()}
                </div>
            </div>

            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                {(0..FLOATING_RINGS).map(|i| view! {
                    <div
                        class="absolute w-32 h-32 border border-white/10 rounded-full animate-bounce"
                        style=floating_ring_style(i)
                    ></div>
                }).collect_view()}
            </div>
        </div>
    }
}
