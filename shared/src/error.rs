//! # Common Error Types
//!
//! The dashboard core never fails during navigation; errors only exist at its
//! edges, where data or a wallet identity comes in from outside.
//!
//! ## Error Categories
//!
//! - [`CollectionError`]: a token collection could not be built (bad JSON, duplicate ids)
//! - [`WalletError`]: the wallet collaborator could not produce an identity
//!
//! Both are `Clone` so they can live inside reactive signals and resources.

use thiserror::Error;

/// Failure to build a [`crate::Collection`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Two tokens share the same id. Ids must be unique within a collection.
    #[error("duplicate token id {0} in collection")]
    DuplicateId(u32),

    /// The token source payload is not a valid JSON token array.
    #[error("invalid collection JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for CollectionError {
    fn from(err: serde_json::Error) -> Self {
        CollectionError::Json(err.to_string())
    }
}

/// Failure reported by a [`crate::gate::WalletConnector`].
///
/// # Example
///
/// ```rust
/// use shared::WalletError;
///
/// let err = WalletError::NotInstalled("Pera".to_string());
/// assert_eq!(err.to_string(), "Pera wallet not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No wallet of the requested kind is available in the browser.
    #[error("{0} wallet not found")]
    NotInstalled(String),

    /// The user declined, or the wallet refused the connection.
    #[error("connection rejected: {0}")]
    Rejected(String),

    /// The wallet answered with something we could not read.
    #[error("wallet interop error: {0}")]
    Interop(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_conversion_keeps_message() {
        let err = serde_json::from_str::<Vec<u32>>("[1, ").unwrap_err();
        let converted = CollectionError::from(err);
        assert!(matches!(converted, CollectionError::Json(ref msg) if !msg.is_empty()));
        assert!(converted.to_string().starts_with("invalid collection JSON"));
    }

    #[test]
    fn test_wallet_error_display() {
        assert_eq!(
            WalletError::Rejected("user closed the popup".to_string()).to_string(),
            "connection rejected: user closed the popup"
        );
    }
}
