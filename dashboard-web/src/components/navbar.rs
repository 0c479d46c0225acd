//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::utils::truncate_address;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">
                        <span class="accent">"POAP"</span><span class="nav-title-rest">"Dashboard"</span>
                    </span>
                </A>
                <div class="nav-links">
                    <A href="/about" attr:class="nav-link">"About"</A>
                    {move || wallet_ctx.address().map(|address| {
                        let provider = wallet_ctx.provider().map(|p| p.name()).unwrap_or("Wallet");
                        view! {
                            <span class="address-chip" title=address.clone()>
                                <span class="address-provider">{provider}</span>
                                {truncate_address(&address)}
                            </span>
                            <button class="nav-button" on:click=move |_| wallet_ctx.disconnect()>
                                "Disconnect"
                            </button>
                        }
                    })}
                </div>
            </div>
        </nav>
    }
}
