//! DebreTech - AI and IT services single-page site
//!
//! A Hungarian-language marketing site with a themed layout, a validated
//! contact form and a keyword-matched assistant chatbot, built with Leptos
//! and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
