//! POAP Dashboard Web App - Leptos Frontend
//!
//! Glass-and-starfield themed attendee dashboard

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{Navbar, Starfield};
use crate::hide_loading_screen;
use crate::pages::{AboutPage, DashboardPage};
use crate::state::wallet::provide_wallet_context;
use crate::utils::config::DashboardConfig;

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::from_location();
    log::info!("[CONFIG] {:?}", config);
    provide_context(config);
    provide_wallet_context();

    // Backup in case main() ran before index.html finished parsing
    Effect::new(move || {
        hide_loading_screen();
    });

    view! {
        <Router>
            <div class="app-container">
                <Starfield/>
                <Navbar/>
                <main class="page">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=DashboardPage/>
                        <Route path=path!("/about") view=AboutPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="centered">
            <div class="glass-card narrow">
                <h1 class="card-heading">"404 - Page Not Found"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="glow-button">"Back to Dashboard"</span>
                </A>
            </div>
        </div>
    }
}
