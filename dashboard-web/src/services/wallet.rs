//! Algorand Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for browser Algorand wallets. An ARC-0001 wallet injects
//! `window.algorand` and is connected with `enable()`. Pera and Defly are
//! reached through their connect SDKs when the page has loaded them
//! (`window.PeraWalletConnect`, `window.DeflyWalletConnect`); Exodus injects
//! `window.exodus.algorand`.

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::Reflect;
use serde::{Deserialize, Serialize};
use shared::gate::{MockWalletConnector, WalletConnector};
use shared::{WalletError, WalletIdentity, WalletProvider};
use wasm_bindgen::prelude::*;

use crate::utils::config::{DashboardConfig, WalletMode};

// ============================================================================
// WALLET DETECTION AND CONNECTION (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function detectAlgorandWallets() {
    const wallets = [];

    if (window.algorand && typeof window.algorand.enable === 'function') {
        wallets.push({ name: 'Algorand', provider: 'algorand', installed: true });
    }
    if (typeof window.PeraWalletConnect === 'function') {
        wallets.push({ name: 'Pera', provider: 'pera', installed: true });
    }
    if (typeof window.DeflyWalletConnect === 'function') {
        wallets.push({ name: 'Defly', provider: 'defly', installed: true });
    }
    if (window.exodus && window.exodus.algorand) {
        wallets.push({ name: 'Exodus', provider: 'exodus', installed: true });
    }

    return wallets;
}

export function isAlgorandWalletAvailable(provider) {
    switch (provider) {
        case 'algorand':
            return !!(window.algorand && typeof window.algorand.enable === 'function');
        case 'pera':
            return typeof window.PeraWalletConnect === 'function';
        case 'defly':
            return typeof window.DeflyWalletConnect === 'function';
        case 'exodus':
            return !!(window.exodus && window.exodus.algorand);
        default:
            return false;
    }
}

function firstAccount(response) {
    if (!response) {
        return null;
    }
    if (Array.isArray(response)) {
        return response.length > 0 ? String(response[0]) : null;
    }
    if (response.address) {
        return String(response.address);
    }
    if (Array.isArray(response.accounts) && response.accounts.length > 0) {
        const account = response.accounts[0];
        return String(account.address || account);
    }
    return null;
}

export async function connectAlgorandWallet(provider) {
    let response;
    try {
        switch (provider) {
            case 'algorand':
                response = await window.algorand.enable();
                break;
            case 'pera': {
                const pera = new window.PeraWalletConnect();
                response = await pera.connect();
                break;
            }
            case 'defly': {
                const defly = new window.DeflyWalletConnect();
                response = await defly.connect();
                break;
            }
            case 'exodus':
                response = await window.exodus.algorand.connect();
                break;
            default:
                throw new Error('Unsupported wallet: ' + provider);
        }
    } catch (error) {
        throw new Error(error && error.message ? error.message : String(error));
    }

    const address = firstAccount(response);
    if (!address) {
        throw new Error('Wallet returned no accounts');
    }
    return { address: address, provider: provider };
}
")]
extern "C" {
    /// Detect all installed Algorand wallets
    fn detectAlgorandWallets() -> JsValue;

    /// Whether a specific provider can be reached right now
    fn isAlgorandWalletAvailable(provider: &str) -> bool;

    /// Connect to a specific wallet provider, resolves to `{ address, provider }`
    #[wasm_bindgen(catch)]
    async fn connectAlgorandWallet(provider: &str) -> Result<JsValue, JsValue>;
}

/// Detected wallet information
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectedWallet {
    pub name: String,
    pub provider: String,
    pub installed: bool,
}

/// Get list of available wallets
pub fn get_available_wallets() -> Vec<DetectedWallet> {
    serde_wasm_bindgen::from_value(detectAlgorandWallets()).unwrap_or_else(|e| {
        log::warn!("[WALLET] Could not read detected wallets: {}", e);
        vec![]
    })
}

/// Providers that are installed, in detection order.
pub fn available_providers() -> Vec<WalletProvider> {
    get_available_wallets()
        .iter()
        .filter(|w| w.installed)
        .filter_map(|w| WalletProvider::from_key(&w.provider))
        .collect()
}

/// Pull a readable message out of a rejected JS promise.
fn js_error_message(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

// ============================================================================
// WALLET CONNECTORS
// ============================================================================

/// Connector backed by a real browser wallet.
#[derive(Clone, Debug)]
pub struct BrowserWalletConnector {
    provider: WalletProvider,
}

impl BrowserWalletConnector {
    pub fn new(provider: WalletProvider) -> Self {
        Self { provider }
    }

    /// Pick `preferred` when it is installed, else the first detected wallet.
    pub fn detect(preferred: Option<WalletProvider>) -> Option<Self> {
        let installed = available_providers();
        preferred
            .filter(|p| installed.contains(p))
            .or_else(|| installed.first().copied())
            .map(Self::new)
    }
}

#[async_trait(?Send)]
impl WalletConnector for BrowserWalletConnector {
    fn provider(&self) -> WalletProvider {
        self.provider
    }

    async fn connect(&self) -> Result<WalletIdentity, WalletError> {
        let key = self.provider.key();
        if !isAlgorandWalletAvailable(key) {
            return Err(WalletError::NotInstalled(self.provider.name().to_string()));
        }

        let result = connectAlgorandWallet(key)
            .await
            .map_err(|e| WalletError::Rejected(js_error_message(&e)))?;

        let address = Reflect::get(&result, &JsValue::from_str("address"))
            .map_err(|e| WalletError::Interop(js_error_message(&e)))?
            .as_string()
            .ok_or_else(|| WalletError::Interop("address is not a string".to_string()))?;

        Ok(WalletIdentity {
            address,
            provider: self.provider,
        })
    }
}

/// Choose the wallet collaborator for this page load.
pub fn build_connector(config: &DashboardConfig) -> Rc<dyn WalletConnector> {
    match config.wallet_mode {
        WalletMode::Mock => Rc::new(MockWalletConnector::new()),
        WalletMode::Browser => {
            let provider = BrowserWalletConnector::detect(config.preferred_provider)
                .map(|c| c.provider)
                .or(config.preferred_provider)
                .unwrap_or(WalletProvider::Pera);
            Rc::new(BrowserWalletConnector::new(provider))
        }
        WalletMode::Auto => match BrowserWalletConnector::detect(config.preferred_provider) {
            Some(connector) => Rc::new(connector),
            None => {
                log::info!("[WALLET] No browser wallet detected, using demo wallet");
                Rc::new(MockWalletConnector::new())
            }
        },
    }
}
