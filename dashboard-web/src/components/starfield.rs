//! Starfield Background Component
//! Animated background of twinkling stars behind the glass cards

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::utils::constants::{STARFIELD_ELEMENT_ID, STARFIELD_MOUNT_DELAY_MS, STARFIELD_STAR_COUNT};

#[component]
pub fn Starfield() -> impl IntoView {
    leptos::task::spawn_local(async move {
        // Wait for the container to be in the DOM
        TimeoutFuture::new(STARFIELD_MOUNT_DELAY_MS).await;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let container = document
            .get_element_by_id(STARFIELD_ELEMENT_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        match container {
            Some(container) => populate_stars(&document, &container),
            None => log::warn!("[STARFIELD] Container #{} not found", STARFIELD_ELEMENT_ID),
        }
    });

    view! {
        <div class="starfield" id=STARFIELD_ELEMENT_ID></div>
    }
}

fn populate_stars(document: &Document, container: &HtmlElement) {
    for _ in 0..STARFIELD_STAR_COUNT {
        let Ok(star) = document.create_element("div") else {
            continue;
        };
        star.set_class_name("star");

        let left = js_sys::Math::random() * 100.0;
        let top = js_sys::Math::random() * 100.0;
        let delay = js_sys::Math::random() * 3.0;
        let roll = js_sys::Math::random();

        let style = if roll > 0.85 {
            // Larger cyan stars
            let size = js_sys::Math::random() * 2.0 + 2.0;
            format!(
                "left: {}%; top: {}%; animation-delay: {}s; width: {}px; height: {}px; \
                 background: #67e8f9; box-shadow: 0 0 10px rgba(34, 211, 238, 0.8);",
                left, top, delay, size, size
            )
        } else if roll > 0.75 {
            // Purple-tinted stars
            let size = js_sys::Math::random() * 1.5 + 1.0;
            format!(
                "left: {}%; top: {}%; animation-delay: {}s; width: {}px; height: {}px; \
                 background: #c084fc; box-shadow: 0 0 8px rgba(168, 85, 247, 0.6);",
                left, top, delay, size, size
            )
        } else {
            let size = js_sys::Math::random() * 2.0 + 1.0;
            format!(
                "left: {}%; top: {}%; animation-delay: {}s; width: {}px; height: {}px;",
                left, top, delay, size, size
            )
        };

        if star.set_attribute("style", &style).is_err() {
            continue;
        }
        if let Err(e) = container.append_child(&star) {
            log::warn!("[STARFIELD] Failed to append star: {:?}", e);
            return;
        }
    }
}
