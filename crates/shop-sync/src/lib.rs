//! # shop-sync
//!
//! Cart-change fan-out for the storefront engine.
//!
//! This crate provides:
//! - `SyncContext` for declaring which delivery capabilities a surface has
//! - `CartSyncNotifier` for fanning one change out to every channel
//! - `ResyncGuard` for cancelling the delayed re-notification on teardown
//! - The four `SyncChannel` implementations (callback, event bus, shared
//!   store, panel flash)
//!
//! ## Example
//!
//! ```rust,ignore
//! use shop_sync::{CartSyncNotifier, SyncContext};
//!
//! let context = SyncContext::new()
//!     .with_event_bus(bus)
//!     .with_store(store);
//!
//! let notifier = CartSyncNotifier::from_context(context);
//!
//! // After a successful cart mutation
//! let guard = notifier.notify_cart_changed("product-page");
//!
//! // Keep the guard if teardown should cancel the delayed resync,
//! // or let it run unowned:
//! guard.detach();
//! ```

pub mod channels;
pub mod context;
pub mod notifier;
pub mod resync;

// Re-exports for convenience
pub use channels::{BroadcastChannel, CallbackChannel, PanelFlashChannel, StorageChannel};
pub use context::SyncContext;
pub use notifier::{CartSyncNotifier, DEFAULT_RESYNC_DELAY};
pub use resync::ResyncGuard;
