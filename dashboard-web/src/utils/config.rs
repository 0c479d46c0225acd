//! # Dashboard Configuration
//!
//! Runtime configuration read from the page URL. Every field has a default, so
//! a bare `/` works out of the box with a browser wallet and the bundled
//! sample collection.
//!
//! | Parameter    | Values                                | Default        |
//! |--------------|---------------------------------------|----------------|
//! | `wallet`     | `auto`, `browser`, `mock`             | `auto`         |
//! | `provider`   | `algorand`, `pera`, `defly`, `exodus` | first detected |
//! | `collection` | URL of a JSON token array             | bundled sample |
//!
//! With `wallet` unset the dashboard uses a browser wallet when one is
//! detected and falls back to the mock wallet otherwise.

use std::collections::HashMap;

use shared::WalletProvider;

use crate::utils::constants::{PARAM_COLLECTION, PARAM_PROVIDER, PARAM_WALLET};
use crate::utils::url::get_query_params;

/// Which wallet collaborator backs the connect button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WalletMode {
    /// Browser wallet if one is installed, otherwise mock.
    #[default]
    Auto,
    Browser,
    Mock,
}

impl WalletMode {
    fn from_param(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "browser" => Some(WalletMode::Browser),
            "mock" | "demo" => Some(WalletMode::Mock),
            "auto" => Some(WalletMode::Auto),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DashboardConfig {
    pub wallet_mode: WalletMode,
    pub preferred_provider: Option<WalletProvider>,
    /// Remote JSON token array. `None` uses the bundled sample collection.
    pub collection_url: Option<String>,
}

impl DashboardConfig {
    /// Build from already-decoded query parameters. Unknown values are logged
    /// and replaced by the default.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let wallet_mode = match params.get(PARAM_WALLET) {
            Some(value) => WalletMode::from_param(value).unwrap_or_else(|| {
                log::warn!("[CONFIG] Unknown wallet mode '{}', using auto", value);
                WalletMode::Auto
            }),
            None => WalletMode::Auto,
        };

        let preferred_provider = params.get(PARAM_PROVIDER).and_then(|value| {
            let provider = WalletProvider::from_key(value).filter(|p| *p != WalletProvider::Demo);
            if provider.is_none() {
                log::warn!("[CONFIG] Unknown wallet provider '{}', ignoring", value);
            }
            provider
        });

        let collection_url = params
            .get(PARAM_COLLECTION)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Self {
            wallet_mode,
            preferred_provider,
            collection_url,
        }
    }

    pub fn from_location() -> Self {
        Self::from_params(&get_query_params())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::from_params(&HashMap::new());
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.wallet_mode, WalletMode::Auto);
    }

    #[test]
    fn test_all_parameters() {
        let config = DashboardConfig::from_params(&params(&[
            ("wallet", "Browser"),
            ("provider", "exodus"),
            ("collection", " https://example.org/poaps.json "),
        ]));
        assert_eq!(config.wallet_mode, WalletMode::Browser);
        assert_eq!(config.preferred_provider, Some(WalletProvider::Exodus));
        assert_eq!(
            config.collection_url.as_deref(),
            Some("https://example.org/poaps.json")
        );
    }

    #[test]
    fn test_injected_wallet_provider() {
        let config = DashboardConfig::from_params(&params(&[("provider", "algorand")]));
        assert_eq!(config.preferred_provider, Some(WalletProvider::Algorand));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = DashboardConfig::from_params(&params(&[
            ("wallet", "hardware"),
            ("provider", "demo"),
            ("collection", ""),
        ]));
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_mock_aliases() {
        for value in ["mock", "demo", "MOCK"] {
            let config = DashboardConfig::from_params(&params(&[("wallet", value)]));
            assert_eq!(config.wallet_mode, WalletMode::Mock);
        }
    }
}
