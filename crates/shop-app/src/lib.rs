//! # shop-app
//!
//! Product page session, cart badge, and application wiring for the
//! storefront engine.
//!
//! This crate provides:
//! - `ProductPage` for the headless product-detail flow
//! - `CartBadge` for the event-bus-driven header counter
//! - `AppContext` wiring clients, bus, store, badge, and notifier
//! - Fixture API implementations backed by `config/products.toml`

pub mod badge;
pub mod fixtures;
pub mod session;
pub mod state;

// Re-exports for convenience
pub use badge::CartBadge;
pub use fixtures::{load_catalog, FixtureCartApi, FixtureProductApi};
pub use session::{ProductPage, CHECKOUT_PATH};
pub use state::AppContext;
