//! # Connection Gate
//!
//! Tracks whether a wallet identity is available and decides which branch of
//! the dashboard renders. The wallet itself is an external collaborator,
//! reached only through the [`WalletConnector`] capability.
//!
//! ## States
//!
//! ```text
//! Disconnected --connect--> Connecting --ok--> Connected { identity }
//!                                      \--err--> Failed(reason)
//! Failed / Connected --disconnect--> Disconnected
//! ```
//!
//! Only `Connected` unlocks the collection branch. `Connecting` and `Failed`
//! keep the connect prompt on screen.

use async_trait::async_trait;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::WalletError;

/// Algorand wallets the dashboard knows how to talk to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    /// Any wallet injected as `window.algorand` (ARC-0001 `enable()`).
    Algorand,
    Pera,
    Defly,
    Exodus,
    /// Local stand-in that needs no browser extension.
    Demo,
}

impl WalletProvider {
    pub const BROWSER: [WalletProvider; 4] = [
        WalletProvider::Algorand,
        WalletProvider::Pera,
        WalletProvider::Defly,
        WalletProvider::Exodus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WalletProvider::Algorand => "Algorand",
            WalletProvider::Pera => "Pera",
            WalletProvider::Defly => "Defly",
            WalletProvider::Exodus => "Exodus",
            WalletProvider::Demo => "Demo",
        }
    }

    /// Lowercase key used in query strings and JS interop.
    pub fn key(&self) -> &'static str {
        match self {
            WalletProvider::Algorand => "algorand",
            WalletProvider::Pera => "pera",
            WalletProvider::Defly => "defly",
            WalletProvider::Exodus => "exodus",
            WalletProvider::Demo => "demo",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "algorand" | "injected" => Some(WalletProvider::Algorand),
            "pera" => Some(WalletProvider::Pera),
            "defly" => Some(WalletProvider::Defly),
            "exodus" => Some(WalletProvider::Exodus),
            "demo" | "mock" => Some(WalletProvider::Demo),
            _ => None,
        }
    }
}

/// Identity handed back by a wallet after a successful connect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletIdentity {
    pub address: String,
    pub provider: WalletProvider,
}

/// Which half of the dashboard is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardBranch {
    ConnectPrompt,
    Collection,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ConnectionGate {
    #[default]
    Disconnected,
    Connecting,
    Connected(WalletIdentity),
    Failed(String),
}

impl ConnectionGate {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionGate::Connected(_))
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, ConnectionGate::Connecting)
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            ConnectionGate::Connected(identity) => Some(&identity.address),
            _ => None,
        }
    }

    pub fn provider(&self) -> Option<WalletProvider> {
        match self {
            ConnectionGate::Connected(identity) => Some(identity.provider),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ConnectionGate::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn branch(&self) -> DashboardBranch {
        if self.is_connected() {
            DashboardBranch::Collection
        } else {
            DashboardBranch::ConnectPrompt
        }
    }
}

/// Capability to obtain a wallet identity.
///
/// Futures are not `Send`: implementations run on the browser's single-threaded
/// executor.
#[async_trait(?Send)]
pub trait WalletConnector {
    fn provider(&self) -> WalletProvider;

    async fn connect(&self) -> Result<WalletIdentity, WalletError>;
}

/// Address returned by [`MockWalletConnector`] unless one is supplied.
pub const DEMO_ADDRESS: &str = "POAPDEMO7Q4ZL2VXKBH5N3TY6WJRCQMEGSUAF2DKL7XQP4HNB3VZE5IMYA";

/// Connector that resolves immediately with a fixed address.
#[derive(Clone, Debug)]
pub struct MockWalletConnector {
    address: String,
}

impl MockWalletConnector {
    pub fn new() -> Self {
        Self::with_address(DEMO_ADDRESS)
    }

    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl Default for MockWalletConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl WalletConnector for MockWalletConnector {
    fn provider(&self) -> WalletProvider {
        WalletProvider::Demo
    }

    async fn connect(&self) -> Result<WalletIdentity, WalletError> {
        Ok(WalletIdentity {
            address: self.address.clone(),
            provider: WalletProvider::Demo,
        })
    }
}

/// Run one connect attempt, reporting each gate transition to `on_update`.
///
/// `on_update` sees `Connecting` first, then either `Connected` or `Failed`.
/// The final state is also returned.
pub async fn drive_connect<C, F>(connector: &C, mut on_update: F) -> ConnectionGate
where
    C: WalletConnector + ?Sized,
    F: FnMut(ConnectionGate),
{
    let provider = connector.provider();
    info!("[WALLET] Connecting via {}", provider.name());
    on_update(ConnectionGate::Connecting);

    let next = match connector.connect().await {
        Ok(identity) => {
            info!("[WALLET] Connected {} via {}", identity.address, provider.name());
            ConnectionGate::Connected(identity)
        }
        Err(err) => {
            warn!("[WALLET] {} connection failed: {}", provider.name(), err);
            ConnectionGate::Failed(err.to_string())
        }
    };

    on_update(next.clone());
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RefusingConnector;

    #[async_trait(?Send)]
    impl WalletConnector for RefusingConnector {
        fn provider(&self) -> WalletProvider {
            WalletProvider::Pera
        }

        async fn connect(&self) -> Result<WalletIdentity, WalletError> {
            Err(WalletError::Rejected("user closed the popup".to_string()))
        }
    }

    #[test]
    fn test_only_connected_selects_collection() {
        assert_eq!(ConnectionGate::Disconnected.branch(), DashboardBranch::ConnectPrompt);
        assert_eq!(ConnectionGate::Connecting.branch(), DashboardBranch::ConnectPrompt);
        assert_eq!(
            ConnectionGate::Failed("nope".to_string()).branch(),
            DashboardBranch::ConnectPrompt
        );
        let connected = ConnectionGate::Connected(WalletIdentity {
            address: "ADDR".to_string(),
            provider: WalletProvider::Exodus,
        });
        assert_eq!(connected.branch(), DashboardBranch::Collection);
        assert_eq!(connected.address(), Some("ADDR"));
        assert_eq!(connected.provider(), Some(WalletProvider::Exodus));
    }

    #[test]
    fn test_provider_keys() {
        for provider in WalletProvider::BROWSER {
            assert_eq!(WalletProvider::from_key(provider.key()), Some(provider));
        }
        assert_eq!(WalletProvider::from_key("MOCK"), Some(WalletProvider::Demo));
        assert_eq!(WalletProvider::from_key("injected"), Some(WalletProvider::Algorand));
        assert!(!WalletProvider::BROWSER.contains(&WalletProvider::Demo));
        assert_eq!(WalletProvider::from_key("metamask"), None);
    }

    #[tokio::test]
    async fn test_drive_connect_reports_connecting_then_connected() {
        let mut seen = Vec::new();
        let final_state = drive_connect(&MockWalletConnector::with_address("ALGO123"), |s| {
            seen.push(s)
        })
        .await;

        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], ConnectionGate::Connecting);
        assert_eq!(final_state.address(), Some("ALGO123"));
        assert_eq!(seen[1], final_state);
    }

    #[tokio::test]
    async fn test_drive_connect_failure_keeps_prompt() {
        let mut last = ConnectionGate::Disconnected;
        let final_state = drive_connect(&RefusingConnector, |s| last = s).await;

        assert_eq!(final_state, last);
        assert_eq!(
            final_state.error(),
            Some("connection rejected: user closed the popup")
        );
        assert_eq!(final_state.branch(), DashboardBranch::ConnectPrompt);
    }
}
