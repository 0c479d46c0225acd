//! POAP Attendee Dashboard - Leptos Frontend
//!
//! Shows a wallet holder's proof-of-attendance tokens as animated cards.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;
use utils::constants::LOADING_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[STARTUP] POAP dashboard starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen that `index.html` shows until the wasm is up.
pub(crate) fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("[STARTUP] No document available, cannot hide loading screen");
        return;
    };

    let Some(loading_element) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::debug!("[STARTUP] Loading element already gone");
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("[STARTUP] Failed to add 'hidden' class: {:?}", e);
        }
    }

    // Inline style wins over any stylesheet ordering
    if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
        log::warn!("[STARTUP] Failed to hide loading element: {:?}", e);
    }
    log::info!("[STARTUP] Loading screen hidden");
}

#[cfg(test)]
mod tests {
    const MANIFEST: &str = include_str!("../Cargo.toml");

    #[test]
    fn test_entry_point_is_only_built_as_the_library() {
        assert!(MANIFEST
            .lines()
            .any(|line| line.trim_start().starts_with("autobins = false")));
        assert!(!MANIFEST.contains("[[bin]]"));
    }
}
