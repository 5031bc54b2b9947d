//! Site header with section navigation, theme toggle and the mobile menu

use leptos::prelude::*;

use crate::ui::scroll::{scroll_to_section, scroll_to_top};
use crate::ui::theme::use_theme_context;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Element id of the fixed header, used for scroll offset math
pub const HEADER_ID: &str = "site-header";

/// Section links in page order as (element id, label) pairs
const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Főoldal"),
    ("services", "Szolgáltatások"),
    ("about", "Rólunk"),
    ("contact", "Kapcsolat"),
];

/// Fixed page header with desktop links and a collapsible mobile menu
#[component]
pub fn SiteHeader() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{click, keydown};

        // Escape closes the mobile menu
        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && menu_open.get_untracked() {
                menu_open.set(false);
            }
        });
        on_cleanup(move || drop(handle_keydown));

        // So does a click landing outside the menu and its toggle
        let handle_click = window_event_listener(click, move |ev| {
            if !menu_open.get_untracked() {
                return;
            }
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .map(|el| {
                    matches!(el.closest("#site-menu"), Ok(Some(_)))
                        || matches!(el.closest("#menu-toggle"), Ok(Some(_)))
                })
                .unwrap_or(false);
            if !inside {
                menu_open.set(false);
            }
        });
        on_cleanup(move || drop(handle_click));
    }

    let go_to = move |id: &'static str| {
        menu_open.set(false);
        scroll_to_section(id);
    };

    view! {
        <header
            id=HEADER_ID
            class="fixed top-0 left-0 right-0 z-50 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <a
                        href="#"
                        class="flex items-center gap-3 hover:opacity-80 transition-opacity"
                        on:click=move |ev| {
                            ev.prevent_default();
                            menu_open.set(false);
                            scroll_to_top();
                        }
                    >
                        <Logo />
                        <span class="text-xl font-bold text-theme-primary">"DebreTech"</span>
                    </a>

                    // Desktop navigation
                    <div class="hidden md:flex items-center gap-6">
                        <nav class="flex items-center gap-4">
                            {NAV_LINKS
                                .iter()
                                .map(|&(id, label)| {
                                    view! {
                                        <a
                                            href=format!("#{id}")
                                            class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                go_to(id);
                                            }
                                        >
                                            {label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                        <ThemeToggle />
                    </div>

                    // Mobile menu button
                    <button
                        id="menu-toggle"
                        class="md:hidden p-2 rounded-lg text-xl leading-none text-theme-primary
                               hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                        on:click=move |_| menu_open.update(|v| *v = !*v)
                        aria-label="Menü"
                        aria-expanded=move || menu_open.get()
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>

                // Mobile menu
                <div
                    id="site-menu"
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !menu_open.get()
                    class:max-h-96=move || menu_open.get()
                >
                    <div class="py-4 space-y-4 border-t border-theme/50">
                        <nav class="flex flex-col gap-2">
                            {NAV_LINKS
                                .iter()
                                .map(|&(id, label)| {
                                    view! {
                                        <a
                                            href=format!("#{id}")
                                            class="block px-4 py-2 text-sm font-medium text-theme-secondary
                                                   hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                go_to(id);
                                            }
                                        >
                                            {label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <div class="px-4">
                                <ThemeToggle />
                            </div>
                        </nav>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Theme toggle button: moon while the light theme is active, sun in dark mode
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            class="p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors
                   border border-gray-300 dark:border-gray-600"
            on:click=move |_| theme.toggle()
            aria-label=move || {
                if theme.is_dark.get() {
                    "Váltás világos témára"
                } else {
                    "Váltás sötét témára"
                }
            }
        >
            {move || if theme.is_dark.get() { "☀️" } else { "🌙" }}
        </button>
    }
}

/// Logo mark shown in the header and footer
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-accent-primary to-blue-600 rounded-xl
                    flex items-center justify-center shadow-lg">
            <span class="text-white font-bold text-sm">"DT"</span>
        </div>
    }
}
