//! Token sources
//!
//! Where the carousel's collection comes from. The bundled sample is the
//! default; a JSON token array can also be fetched from a URL.

use async_trait::async_trait;
use gloo_net::http::Request;
use shared::{Collection, CollectionError};
use thiserror::Error;

use crate::utils::config::DashboardConfig;

const SAMPLE_COLLECTION_JSON: &str = include_str!("../../assets/sample_collection.json");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(String),

    #[error("token source responded with HTTP {0}")]
    Status(u16),

    #[error(transparent)]
    Collection(#[from] CollectionError),
}

#[async_trait(?Send)]
pub trait TokenSource {
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Collection, SourceError>;
}

/// Collection bundled into the wasm binary.
pub fn sample_collection() -> Result<Collection, CollectionError> {
    Collection::from_json(SAMPLE_COLLECTION_JSON)
}

pub struct SampleTokenSource;

#[async_trait(?Send)]
impl TokenSource for SampleTokenSource {
    fn describe(&self) -> String {
        "bundled sample".to_string()
    }

    async fn load(&self) -> Result<Collection, SourceError> {
        Ok(sample_collection()?)
    }
}

pub struct HttpTokenSource {
    url: String,
}

impl HttpTokenSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl TokenSource for HttpTokenSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<Collection, SourceError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))?;

        if !response.ok() {
            return Err(SourceError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))?;
        Ok(Collection::from_json(&body)?)
    }
}

pub fn build_token_source(config: &DashboardConfig) -> Box<dyn TokenSource> {
    match &config.collection_url {
        Some(url) => Box::new(HttpTokenSource::new(url.clone())),
        None => Box::new(SampleTokenSource),
    }
}

/// Load the configured collection, logging the outcome.
pub async fn load_collection(config: DashboardConfig) -> Result<Collection, SourceError> {
    let source = build_token_source(&config);
    log::info!("[COLLECTION] Loading from {}", source.describe());

    let result = source.load().await;
    match &result {
        Ok(collection) => log::info!("[COLLECTION] Loaded {} tokens", collection.len()),
        Err(e) => log::error!("[COLLECTION] Failed to load: {}", e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Rarity;

    #[test]
    fn test_sample_collection_is_legendary_rare_common() {
        let collection = sample_collection().expect("bundled sample must parse");
        let rarities: Vec<Rarity> = collection.iter().map(|t| t.rarity).collect();
        assert_eq!(rarities, vec![Rarity::Legendary, Rarity::Rare, Rarity::Common]);
        assert_eq!(
            collection.get(0).map(|t| t.event_name.as_str()),
            Some("Algorand Developer Summit 2024")
        );
    }

    #[test]
    fn test_source_selection() {
        let sample = build_token_source(&DashboardConfig::default());
        assert_eq!(sample.describe(), "bundled sample");

        let config = DashboardConfig {
            collection_url: Some("https://example.org/poaps.json".to_string()),
            ..DashboardConfig::default()
        };
        assert_eq!(build_token_source(&config).describe(), "https://example.org/poaps.json");
    }

    #[test]
    fn test_collection_error_converts() {
        let err: SourceError = CollectionError::DuplicateId(7).into();
        assert_eq!(err.to_string(), "duplicate token id 7 in collection");
    }
}
