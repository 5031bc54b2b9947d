//! Window scrolling: smooth anchor navigation and the scroll-to-top button

use leptos::prelude::*;

/// Page offset beyond which the scroll-to-top button is shown, in pixels
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

/// Gap kept between the fixed header and a scroll target, in pixels
pub const HEADER_GAP_PX: f64 = 20.0;

/// Smooth-scroll the window back to the top
#[cfg(not(feature = "ssr"))]
pub fn scroll_to_top() {
    use web_sys::{ScrollBehavior, ScrollToOptions};

    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(feature = "ssr")]
pub fn scroll_to_top() {}

/// Smooth-scroll to the section with the given element id, stopping short of
/// the fixed header so the section heading stays visible
#[cfg(not(feature = "ssr"))]
pub fn scroll_to_section(id: &str) {
    use leptos::wasm_bindgen::JsCast;
    use web_sys::{ScrollBehavior, ScrollToOptions};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let header_height = document
        .get_element_by_id(crate::ui::nav::HEADER_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| el.offset_height())
        .unwrap_or(0);
    let top = (target.offset_top() - header_height) as f64 - HEADER_GAP_PX;

    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top.max(0.0));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(feature = "ssr")]
pub fn scroll_to_section(_id: &str) {}

/// Floating button that appears after the page is scrolled down and jumps
/// back to the top when clicked
#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let visible = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let handle_scroll = window_event_listener(scroll, move |_| {
            let offset = web_sys::window()
                .and_then(|w| w.page_y_offset().ok())
                .unwrap_or(0.0);
            visible.set(offset > SCROLL_TOP_THRESHOLD_PX);
        });

        on_cleanup(move || drop(handle_scroll));
    }

    view! {
        <button
            class="fixed bottom-[100px] right-5 z-40 w-11 h-11 rounded-full bg-accent-primary text-white text-xl
                   shadow-lg hover:bg-accent-primary-hover transition-all duration-300"
            class:opacity-0=move || !visible.get()
            class:pointer-events-none=move || !visible.get()
            on:click=move |_| scroll_to_top()
            aria-label="Ugrás az oldal tetejére"
        >
            "↑"
        </button>
    }
}
