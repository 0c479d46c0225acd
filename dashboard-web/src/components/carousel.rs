//! Carousel Component
//!
//! One card at a time with previous/next buttons and a dot per token. The
//! slide is rebuilt whenever the index moves, which replays its entry
//! animation.

use leptos::prelude::*;
use shared::rarity::classify;
use shared::Carousel;

use crate::components::PoapCard;

#[component]
pub fn CarouselView(carousel: RwSignal<Carousel>) -> impl IntoView {
    // The collection never changes while mounted, only the index does
    let len = carousel.with_untracked(Carousel::len);

    if len == 0 {
        return view! {
            <div class="glass-card narrow empty-collection">
                <p class="card-heading">"No POAPs collected yet"</p>
                <p class="muted">"Attend an event and scan its QR code to claim your first one."</p>
            </div>
        }
        .into_any();
    }

    let slide = move || {
        carousel
            .with(|c| c.current().cloned())
            .map(|token| {
                let descriptor = classify(token.rarity);
                view! {
                    <div class="carousel-slide">
                        <PoapCard token=token descriptor=descriptor is_current=true/>
                    </div>
                }
            })
    };

    let dots = (0..len)
        .map(|index| {
            let class = move || {
                if carousel.with(|c| c.is_current(index)) {
                    "carousel-dot active"
                } else {
                    "carousel-dot"
                }
            };
            view! {
                <button
                    class=class
                    aria-label=format!("Show POAP {}", index + 1)
                    on:click=move |_| {
                        carousel.update(|c| {
                            c.seek(index);
                        });
                    }
                ></button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="carousel">
            {slide}

            <button
                class="carousel-nav prev"
                aria-label="Previous POAP"
                on:click=move |_| carousel.update(Carousel::previous)
            >
                "‹"
            </button>
            <button
                class="carousel-nav next"
                aria-label="Next POAP"
                on:click=move |_| carousel.update(Carousel::next)
            >
                "›"
            </button>

            <div class="carousel-dots">{dots}</div>
        </div>
    }
    .into_any()
}
