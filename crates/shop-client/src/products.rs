//! # Product Client
//!
//! Typed client for the storefront product endpoints.

use async_trait::async_trait;
use reqwest::Client;
use shop_core::{Product, ProductApi, StorefrontError, StorefrontResult};
use tracing::{debug, instrument, warn};

use crate::config::ApiConfig;
use crate::envelope::Envelope;

/// REST client backing the product page with live catalog data
pub struct ProductClient {
    config: ApiConfig,
    client: Client,
}

impl ProductClient {
    /// Create a new product client
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

#[async_trait]
impl ProductApi for ProductClient {
    #[instrument(skip(self))]
    async fn fetch_product(&self, product_id: &str) -> StorefrontResult<Product> {
        let url = format!("{}/products/{}", self.config.base_url, product_id);

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
            warn!("Product fetch failed: status={}, body={}", status, body);
            return Err(StorefrontError::ProductUnavailable {
                product_id: product_id.to_string(),
            });
        }

        let envelope: Envelope<Product> = serde_json::from_str(&body).map_err(|e| {
            StorefrontError::Serialization(format!("Failed to parse product response: {}", e))
        })?;

        if !envelope.success {
            warn!(
                "Product fetch rejected: id={}, message={:?}",
                product_id, envelope.message
            );
            return Err(StorefrontError::ProductUnavailable {
                product_id: product_id.to_string(),
            });
        }

        let product = envelope
            .data
            .ok_or_else(|| StorefrontError::ProductUnavailable {
                product_id: product_id.to_string(),
            })?;

        debug!("Fetched product: id={}, price={}", product.id, product.price);
        Ok(product)
    }
}
