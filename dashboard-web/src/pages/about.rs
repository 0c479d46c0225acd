//! About Page

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="centered">
            <div class="glass-card about-container">
                <h1 class="card-heading">"About the POAP Dashboard"</h1>

                <p class="muted">
                    "A proof-of-attendance protocol token (POAP) is a collectible record issued to
                    everyone who attended an event. This dashboard shows the POAPs held by your
                    Algorand wallet, one card at a time."
                </p>

                <h2 class="section-title">"Rarity"</h2>
                <ul class="rarity-legend">
                    <li><span class="legend-swatch rarity-legendary"></span>"Legendary - gold to orange"</li>
                    <li><span class="legend-swatch rarity-rare"></span>"Rare - violet to pink"</li>
                    <li><span class="legend-swatch rarity-common"></span>"Common - cyan to blue"</li>
                </ul>

                <h2 class="section-title">"Wallets"</h2>
                <p class="muted">
                    "Injected ARC-0001 wallets (window.algorand), Pera, Defly and Exodus are supported. Add "<code>"?wallet=mock"</code>
                    " to the URL to try the dashboard with a demo wallet, or "
                    <code>"?collection=<url>"</code>" to load tokens from a JSON file."
                </p>
            </div>
        </div>
    }
}
