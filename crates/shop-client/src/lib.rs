//! # shop-client
//!
//! REST clients for the storefront backend API.
//!
//! This crate provides:
//! - `ApiConfig` loaded from `STOREFRONT_API_URL` / `STOREFRONT_API_TIMEOUT_SECS`
//! - `ProductClient` implementing `shop_core::ProductApi`
//! - `CartClient` implementing `shop_core::CartApi`
//!
//! All responses share the `{ success, data, message }` envelope; failures
//! map onto `StorefrontError` so page logic never sees raw HTTP.

pub mod cart;
pub mod config;
pub mod envelope;
pub mod products;

// Re-exports for convenience
pub use cart::CartClient;
pub use config::{ApiConfig, DEFAULT_TIMEOUT_SECS};
pub use envelope::Envelope;
pub use products::ProductClient;
