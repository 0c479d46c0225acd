//! POAP Card Component
//!
//! Renders one token with its rarity treatment: gradient body, glow,
//! holographic sweep, event details and the certificate hash.

use leptos::prelude::*;
use shared::utils::format_event_date;
use shared::{PoapToken, RarityDescriptor};

#[component]
pub fn PoapCard(
    token: PoapToken,
    descriptor: RarityDescriptor,
    /// Whether this card is the one the carousel is showing
    #[prop(optional)]
    is_current: bool,
) -> impl IntoView {
    let style = format!(
        "background: {}; box-shadow: {};",
        descriptor.card_background(),
        descriptor.card_shadow()
    );
    let class = if is_current { "poap-card current" } else { "poap-card" };
    let rarity = token.rarity.as_str();

    view! {
        <article class=class data-rarity=rarity style=style>
            <div class="holo-overlay"></div>

            <div class="poap-card-content">
                <header class="poap-card-header">
                    <div>
                        <h3 class="poap-event">{token.event_name}</h3>
                        <p class="poap-badge">{descriptor.badge_text()}</p>
                    </div>
                    <div class="poap-qr" aria-hidden="true">"▦"</div>
                </header>

                <ul class="poap-details">
                    <li>
                        <span class="detail-icon">"📅"</span>
                        <span>{format_event_date(token.date)}</span>
                    </li>
                    <li>
                        <span class="detail-icon">"👤"</span>
                        <span>{token.organizer}</span>
                    </li>
                </ul>

                <div class="poap-hash">
                    <div class="poap-hash-label">
                        <span class="detail-icon">"#"</span>
                        <span>"Certificate Hash"</span>
                    </div>
                    <p class="poap-hash-value glitch">{token.hash}</p>
                </div>

                <div class="verified-badge" title="Verified">
                    <div class="verified-dot"></div>
                </div>
            </div>
        </article>
    }
}
