//! # Sync Capability Context
//!
//! Explicit declaration of the delivery capabilities present on a
//! surface. The notifier builds its channel list from this once, so
//! every path it may touch is visible at construction time and an
//! absent capability simply produces no channel.

use std::sync::Arc;

use shop_core::{BoxedSyncChannel, CartPanel, CartRefresh, SharedStore};
use tokio::sync::broadcast;

use crate::channels::{BroadcastChannel, CallbackChannel, PanelFlashChannel, StorageChannel};

/// Optional capabilities the notifier fans out to
#[derive(Default)]
pub struct SyncContext {
    refresh_callback: Option<Arc<dyn Fn() + Send + Sync>>,
    event_bus: Option<broadcast::Sender<CartRefresh>>,
    store: Option<Arc<dyn SharedStore>>,
    cart_panel: Option<Arc<dyn CartPanel>>,
}

impl SyncContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: register the header-badge refresh callback
    pub fn with_refresh_callback(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.refresh_callback = Some(Arc::new(callback));
        self
    }

    /// Builder: register the in-process event bus
    pub fn with_event_bus(mut self, bus: broadcast::Sender<CartRefresh>) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Builder: register the shared store
    pub fn with_store(mut self, store: Arc<dyn SharedStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builder: register the slide-out cart panel
    pub fn with_cart_panel(mut self, panel: Arc<dyn CartPanel>) -> Self {
        self.cart_panel = Some(panel);
        self
    }

    /// Build the channel list in dispatch order: callback, event bus,
    /// storage, panel.
    pub(crate) fn into_channels(self) -> Vec<BoxedSyncChannel> {
        let mut channels: Vec<BoxedSyncChannel> = Vec::new();

        if let Some(callback) = self.refresh_callback {
            channels.push(Arc::new(CallbackChannel::new(callback)));
        }
        if let Some(bus) = self.event_bus {
            channels.push(Arc::new(BroadcastChannel::new(bus)));
        }
        if let Some(store) = self.store {
            channels.push(Arc::new(StorageChannel::new(store)));
        }
        if let Some(panel) = self.cart_panel {
            channels.push(Arc::new(PanelFlashChannel::new(panel)));
        }

        channels
    }
}
