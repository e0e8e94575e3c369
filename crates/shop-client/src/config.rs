//! # Storefront API Configuration
//!
//! Backend endpoint configuration, loaded from environment variables.

use std::env;

use shop_core::{StorefrontError, StorefrontResult};

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Storefront backend configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the storefront backend, without a trailing slash
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `STOREFRONT_API_URL`
    ///
    /// Optional:
    /// - `STOREFRONT_API_TIMEOUT_SECS` (default 30)
    pub fn from_env() -> StorefrontResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let base_url = env::var("STOREFRONT_API_URL").map_err(|_| {
            StorefrontError::Configuration("STOREFRONT_API_URL not set".to_string())
        })?;

        validate_base_url(&base_url)?;

        let timeout_secs = match env::var("STOREFRONT_API_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                StorefrontError::Configuration(
                    "STOREFRONT_API_TIMEOUT_SECS must be a positive integer".to_string(),
                )
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: normalize_base_url(base_url),
            timeout_secs,
        })
    }

    /// Create config with an explicit base URL (for testing)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Builder: set a custom base URL (for testing)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(url.into());
        self
    }

    /// Builder: set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

fn validate_base_url(url: &str) -> StorefrontResult<()> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(StorefrontError::Configuration(
            "STOREFRONT_API_URL must start with http:// or https://".to_string(),
        ));
    }
    Ok(())
}

/// Strip a trailing slash so path joins stay predictable
fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
