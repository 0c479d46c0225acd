//! Connect Prompt Component
//!
//! Shown while no wallet identity is available. The connect button hands the
//! configured wallet collaborator to the wallet context.

use leptos::prelude::*;

use crate::services::wallet::build_connector;
use crate::state::wallet::use_wallet_context;
use crate::utils::config::DashboardConfig;

#[component]
pub fn ConnectPrompt() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let config = expect_context::<DashboardConfig>();

    let on_connect = move |_| {
        let connector = build_connector(&config);
        log::info!("[WALLET] Connect clicked ({})", connector.provider().name());
        wallet_ctx.connect(connector);
    };

    view! {
        <div class="glass-card narrow connect-prompt">
            <div class="wallet-orb">"👛"</div>

            <div>
                <h2 class="card-heading">"Connect Your Wallet"</h2>
                <p class="muted">"Connect your Algorand wallet to view your POAP collection"</p>
            </div>

            {move || wallet_ctx.error().map(|err| view! {
                <div class="error">
                    <p>{err}</p>
                </div>
            })}

            <button
                class="glow-button wide"
                prop:disabled=move || wallet_ctx.is_connecting()
                on:click=on_connect
            >
                {move || if wallet_ctx.is_connecting() {
                    "Connecting..."
                } else {
                    "Connect Algorand Wallet"
                }}
            </button>
        </div>
    }
}
