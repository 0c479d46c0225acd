//! Collector Badge Component

use leptos::prelude::*;
use shared::utils::{collector_stars, COLLECTOR_STAR_SLOTS};

#[component]
pub fn CollectorBadge(collected: usize) -> impl IntoView {
    let lit = collector_stars(collected);
    let noun = if collected == 1 { "NFT" } else { "NFTs" };

    view! {
        <div class="glass-card narrow collector-badge">
            <div class="trophy-orb">"🏆"</div>
            <div>
                <h3 class="collector-title">"POAP Collector"</h3>
                <p class="collector-count">
                    {format!("You've collected {} POAP {} 🚀", collected, noun)}
                </p>
                <div class="stars">
                    {(0..COLLECTOR_STAR_SLOTS)
                        .map(|i| {
                            let class = if i < lit { "star-icon lit" } else { "star-icon" };
                            view! { <span class=class>"★"</span> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
