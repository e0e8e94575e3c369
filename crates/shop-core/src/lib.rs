//! # shop-core
//!
//! Core types and traits for the storefront product-page engine.
//!
//! This crate provides:
//! - `Product`, `ProductCatalog`, and `StockStatus` for the catalog
//! - `PriceQuote` for retail/wholesale pricing
//! - `QuantitySelector` for clamped quantity state
//! - `ProductApi` and `CartApi` traits for wiring real or fixture backends
//! - `CartRefresh`, `SyncChannel`, `SharedStore`, and `CartPanel` for
//!   cross-surface cart synchronization
//! - `StorefrontError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use shop_core::{PriceQuote, Product, QuantitySelector};
//!
//! // A product with a wholesale tier
//! let product = Product::new("hoodie-block", "Block Hoodie", 74.0)
//!     .with_wholesale(44.0, 5)
//!     .with_stock(120);
//!
//! // Walk the selector up to the tier threshold
//! let mut selector = QuantitySelector::new(product.stock);
//! while selector.quantity() < 5 {
//!     selector.increment();
//! }
//!
//! // Quote the line
//! let quote = PriceQuote::evaluate(&product, selector.quantity());
//! assert!(quote.is_wholesale);
//! ```

pub mod api;
pub mod error;
pub mod notice;
pub mod pricing;
pub mod product;
pub mod quantity;
pub mod sync;

// Re-exports for convenience
pub use api::{CartApi, ProductApi};
pub use error::{StorefrontError, StorefrontResult};
pub use notice::{Notice, NoticeLevel};
pub use pricing::PriceQuote;
pub use product::{
    format_price, Product, ProductCatalog, ProductImage, ProductSpec, StockStatus,
    LOW_STOCK_THRESHOLD,
};
pub use quantity::QuantitySelector;
pub use sync::{
    BoxedSyncChannel, CartPanel, CartRefresh, MemoryStore, SharedStore, SyncChannel,
    CART_LAST_UPDATED_KEY,
};
