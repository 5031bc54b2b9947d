//! Page load performance reporting
//!
//! Reads the browser's navigation timing entry once the load event has fired
//! and logs a summary to the console. Renders nothing.

use leptos::prelude::*;

/// Log navigation timing after the window finishes loading
#[component]
pub fn LoadMetrics() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use leptos::ev::load;
        use leptos::task::spawn_local;

        let handle_load = window_event_listener(load, move |_| {
            spawn_local(async move {
                // Let the navigation entry settle before reading it
                TimeoutFuture::new(0).await;
                report_navigation_timing();
            });
        });

        on_cleanup(move || drop(handle_load));
    }
}

#[cfg(not(feature = "ssr"))]
fn report_navigation_timing() {
    use leptos::wasm_bindgen::JsCast;
    use web_sys::PerformanceNavigationTiming;

    let Some(performance) = web_sys::window().and_then(|w| w.performance()) else {
        return;
    };
    let Ok(entry) = performance
        .get_entries_by_type("navigation")
        .get(0)
        .dyn_into::<PerformanceNavigationTiming>()
    else {
        return;
    };

    let load_time = (entry.load_event_end() - entry.load_event_start()).round();
    let dom_content_loaded =
        (entry.dom_content_loaded_event_end() - entry.dom_content_loaded_event_start()).round();
    let total_time = (entry.load_event_end() - entry.fetch_start()).round();

    leptos::logging::log!(
        "DebreTech Website Performance: loadTime={load_time}ms domContentLoaded={dom_content_loaded}ms totalTime={total_time}ms"
    );
}
