//! Attendee Dashboard Page
//!
//! Gate on the wallet connection: the connect prompt while disconnected, the
//! collector badge and POAP carousel once an identity is available. The
//! carousel state lives only as long as the collection branch is mounted.

use leptos::prelude::*;
use shared::{Carousel, Collection, DashboardBranch};

use crate::components::{CarouselView, CollectorBadge, ConnectPrompt};
use crate::services::collection::load_collection;
use crate::state::wallet::use_wallet_context;
use crate::utils::config::DashboardConfig;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let branch = Memo::new(move |_| wallet_ctx.branch());

    view! {
        <div class="dashboard">
            <h1 class="dashboard-title">"Attendee Dashboard"</h1>

            {move || match branch.get() {
                DashboardBranch::ConnectPrompt => view! { <ConnectPrompt/> }.into_any(),
                DashboardBranch::Collection => view! { <CollectionSection/> }.into_any(),
            }}
        </div>
    }
}

/// Loads the configured token source and hands the result to the carousel.
#[component]
fn CollectionSection() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let collection = LocalResource::new(move || load_collection(config.clone()));

    view! {
        {move || match collection.get() {
            None => view! {
                <p class="loading-text">"Loading your collection..."</p>
            }
            .into_any(),
            Some(Ok(items)) => view! { <CollectionBody items=items/> }.into_any(),
            Some(Err(err)) => view! {
                <div class="glass-card narrow">
                    <div class="error">
                        <p>"Could not load your POAPs"</p>
                        <p class="error-detail">{err.to_string()}</p>
                    </div>
                </div>
            }
            .into_any(),
        }}
    }
}

#[component]
fn CollectionBody(items: Collection) -> impl IntoView {
    let collected = items.len();
    let carousel = RwSignal::new(Carousel::new(items));

    let on_scan = move |_| {
        log::info!("[DASHBOARD] QR scanner requested");
    };

    view! {
        <div class="collection-branch">
            <CollectorBadge collected=collected/>

            <section class="collection-section">
                <h2 class="section-title">"Your POAP Collection"</h2>
                <CarouselView carousel=carousel/>
            </section>

            <div class="quick-actions">
                <button class="glow-button scanner" on:click=on_scan>
                    "QR Scanner"
                </button>
            </div>
        </div>
    }
}
