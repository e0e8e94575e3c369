//! # Cart Client
//!
//! Typed client for the storefront cart endpoints. Every add goes out
//! with a client-generated idempotency key so a retried request cannot
//! double-add.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shop_core::{CartApi, StorefrontError, StorefrontResult};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::envelope::Envelope;

/// REST client for the cart endpoints
pub struct CartClient {
    config: ApiConfig,
    client: Client,
}

impl CartClient {
    /// Create a new cart client
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> StorefrontResult<Self> {
        let config = ApiConfig::from_env()?;
        Ok(Self::new(config))
    }
}

#[derive(Debug, Serialize)]
struct AddItemRequest<'a> {
    product_id: &'a str,
    quantity: u32,
}

#[derive(Debug, Deserialize)]
struct CartCountData {
    count: u32,
}

#[async_trait]
impl CartApi for CartClient {
    #[instrument(skip(self))]
    async fn add_item(&self, product_id: &str, quantity: u32) -> StorefrontResult<()> {
        let url = format!("{}/cart/items", self.config.base_url);
        let idempotency_key = Uuid::new_v4().to_string();

        let response = self
            .client
            .post(&url)
            .header("Idempotency-Key", &idempotency_key)
            .json(&AddItemRequest {
                product_id,
                quantity,
            })
            .send()
            .await
            .map_err(|e| StorefrontError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StorefrontError::Network(e.to_string()))?;

        let envelope: Envelope<serde_json::Value> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => {
                return Err(StorefrontError::Serialization(format!(
                    "Failed to parse cart response: {}",
                    e
                )));
            }
            Err(_) => {
                warn!("Cart add rejected: status={}, body={}", status, body);
                return Err(StorefrontError::CartRejected {
                    message: format!("Cart update failed (HTTP {})", status),
                });
            }
        };

        if !status.is_success() || !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| "Could not add item to cart.".to_string());
            warn!(
                "Cart add rejected: product={}, status={}, message={}",
                product_id, status, message
            );
            return Err(StorefrontError::CartRejected { message });
        }

        info!("Added to cart: product={}, quantity={}", product_id, quantity);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn item_count(&self) -> StorefrontResult<u32> {
        let url = format!("{}/cart/count", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StorefrontError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StorefrontError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(StorefrontError::Network(format!(
                "cart count returned HTTP {}",
                status
            )));
        }

        let envelope: Envelope<CartCountData> = serde_json::from_str(&body).map_err(|e| {
            StorefrontError::Serialization(format!("Failed to parse cart count: {}", e))
        })?;

        let count = envelope.data.map(|data| data.count).unwrap_or(0);
        debug!("Cart count: {}", count);
        Ok(count)
    }
}
