//! # Storefront Error Types
//!
//! Typed error handling for the storefront engine.
//! All fallible operations return `Result<T, StorefrontError>`.

use thiserror::Error;

/// Core error type for all storefront operations
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration errors (missing env vars, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Product could not be fetched or is not live on the storefront
    #[error("Product unavailable: {product_id}")]
    ProductUnavailable { product_id: String },

    /// Product has no stock at all
    #[error("Out of stock: {product_id}")]
    OutOfStock { product_id: String },

    /// Requested quantity exceeds the available stock
    #[error("Insufficient stock: requested {requested}, only {available} available")]
    InsufficientStock { requested: u32, available: u32 },

    /// Cart mutation rejected by the backend
    #[error("Cart rejected: {message}")]
    CartRejected { message: String },

    /// Network/HTTP error communicating with the backend
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A sync channel has no live receiver
    #[error("Channel closed: {0}")]
    ChannelClosed(String),
}

impl StorefrontError {
    /// Returns true if retrying the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, StorefrontError::Network(_))
    }

    /// Customer-facing text for the toast surface.
    ///
    /// Server-provided messages pass through; everything else gets a
    /// generic line that never leaks internals.
    pub fn user_message(&self) -> String {
        match self {
            StorefrontError::ProductUnavailable { .. } => {
                "This product is currently unavailable.".to_string()
            }
            StorefrontError::OutOfStock { .. } => "This item is out of stock.".to_string(),
            StorefrontError::InsufficientStock { available, .. } => {
                format!("Only {} left in stock.", available)
            }
            StorefrontError::CartRejected { message } => message.clone(),
            StorefrontError::Network(_) => "Connection problem. Please try again.".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }

    /// Returns true if this error blocks the purchase action entirely
    pub fn blocks_checkout(&self) -> bool {
        matches!(
            self,
            StorefrontError::ProductUnavailable { .. }
                | StorefrontError::OutOfStock { .. }
                | StorefrontError::InsufficientStock { .. }
        )
    }
}

/// Result type alias for storefront operations
pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(StorefrontError::Network("timeout".into()).is_retryable());
        assert!(!StorefrontError::CartRejected {
            message: "item gone".into()
        }
        .is_retryable());
        assert!(!StorefrontError::OutOfStock {
            product_id: "x".into()
        }
        .is_retryable());
    }

    #[test]
    fn test_user_messages() {
        let err = StorefrontError::CartRejected {
            message: "Only 3 left in stock".into(),
        };
        assert_eq!(err.user_message(), "Only 3 left in stock");

        let err = StorefrontError::InsufficientStock {
            requested: 10,
            available: 4,
        };
        assert_eq!(err.user_message(), "Only 4 left in stock.");

        let err = StorefrontError::Serialization("bad json".into());
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn test_blocks_checkout() {
        assert!(StorefrontError::OutOfStock {
            product_id: "x".into()
        }
        .blocks_checkout());
        assert!(StorefrontError::InsufficientStock {
            requested: 5,
            available: 2
        }
        .blocks_checkout());
        assert!(!StorefrontError::Network("timeout".into()).blocks_checkout());
    }
}
