//! Wallet state management

use std::rc::Rc;

use leptos::prelude::*;
use shared::gate::{drive_connect, WalletConnector};
use shared::{ConnectionGate, DashboardBranch, WalletProvider};

/// Global wallet context. Holds the connection gate the dashboard branches on.
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub gate: RwSignal<ConnectionGate>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            gate: RwSignal::new(ConnectionGate::Disconnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.gate.with(ConnectionGate::is_connected)
    }

    pub fn is_connecting(&self) -> bool {
        self.gate.with(ConnectionGate::is_connecting)
    }

    pub fn address(&self) -> Option<String> {
        self.gate.with(|gate| gate.address().map(str::to_string))
    }

    pub fn provider(&self) -> Option<WalletProvider> {
        self.gate.with(ConnectionGate::provider)
    }

    pub fn error(&self) -> Option<String> {
        self.gate.with(|gate| gate.error().map(str::to_string))
    }

    pub fn branch(&self) -> DashboardBranch {
        self.gate.with(ConnectionGate::branch)
    }

    /// Start a connect attempt in the background. Ignored while one is running.
    pub fn connect(&self, connector: Rc<dyn WalletConnector>) {
        if self.gate.with_untracked(ConnectionGate::is_connecting) {
            log::debug!("[WALLET] Connect already in progress");
            return;
        }

        let gate = self.gate;
        leptos::task::spawn_local(async move {
            drive_connect(connector.as_ref(), |next| gate.set(next)).await;
        });
    }

    pub fn disconnect(&self) {
        log::info!("[WALLET] Disconnected");
        self.gate.set(ConnectionGate::Disconnected);
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
