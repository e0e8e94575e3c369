//! # Cart Badge
//!
//! The header cart counter. Holds the last known unit count and stays
//! current by re-querying the cart whenever the event bus announces a
//! change. Missed or duplicate events are harmless; the count is always
//! re-read from the source of truth.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use shop_core::{CartApi, CartRefresh, StorefrontResult};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Header cart counter
pub struct CartBadge {
    cart: Arc<dyn CartApi>,
    count: AtomicU32,
}

impl CartBadge {
    pub fn new(cart: Arc<dyn CartApi>) -> Self {
        Self {
            cart,
            count: AtomicU32::new(0),
        }
    }

    /// Last count fetched from the cart
    pub fn count(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }

    /// Re-query the cart and update the displayed count
    pub async fn refresh(&self) -> StorefrontResult<u32> {
        let count = self.cart.item_count().await?;
        self.count.store(count, Ordering::SeqCst);
        debug!("Cart badge count: {}", count);
        Ok(count)
    }

    /// Spawn the listener that refreshes the badge on every bus event.
    /// The task ends when the bus closes.
    pub fn listen(self: Arc<Self>, mut rx: broadcast::Receiver<CartRefresh>) -> JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(refresh) => {
                        debug!("Badge refresh triggered by '{}'", refresh.source);
                        if let Err(e) = self.refresh().await {
                            warn!("Badge refresh failed: {}", e);
                        }
                    }
                    Err(RecvError::Lagged(missed)) => {
                        warn!("Badge missed {} events, refreshing anyway", missed);
                        if let Err(e) = self.refresh().await {
                            warn!("Badge refresh failed: {}", e);
                        }
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }
}
