//! # Sync Channels
//!
//! The four delivery paths for a cart refresh. Each channel owns its
//! capability handle so the notifier can treat them uniformly.

use std::sync::Arc;

use shop_core::{
    CartPanel, CartRefresh, SharedStore, StorefrontError, StorefrontResult, SyncChannel,
    CART_LAST_UPDATED_KEY,
};
use tokio::sync::broadcast;

/// Direct cart-count refresh callback (primary)
pub struct CallbackChannel {
    refresh: Arc<dyn Fn() + Send + Sync>,
}

impl CallbackChannel {
    pub fn new(refresh: Arc<dyn Fn() + Send + Sync>) -> Self {
        Self { refresh }
    }
}

impl SyncChannel for CallbackChannel {
    fn name(&self) -> &'static str {
        "callback"
    }

    fn notify(&self, _refresh: &CartRefresh) -> StorefrontResult<()> {
        (self.refresh)();
        Ok(())
    }

    fn is_primary(&self) -> bool {
        true
    }
}

/// In-process event bus fan-out (primary)
pub struct BroadcastChannel {
    tx: broadcast::Sender<CartRefresh>,
}

impl BroadcastChannel {
    pub fn new(tx: broadcast::Sender<CartRefresh>) -> Self {
        Self { tx }
    }
}

impl SyncChannel for BroadcastChannel {
    fn name(&self) -> &'static str {
        "event-bus"
    }

    fn notify(&self, refresh: &CartRefresh) -> StorefrontResult<()> {
        self.tx.send(refresh.clone()).map(|_| ()).map_err(|_| {
            StorefrontError::ChannelClosed("no live event-bus receivers".to_string())
        })
    }

    fn is_primary(&self) -> bool {
        true
    }
}

/// Last-updated timestamp write into the shared store
pub struct StorageChannel {
    store: Arc<dyn SharedStore>,
}

impl StorageChannel {
    pub fn new(store: Arc<dyn SharedStore>) -> Self {
        Self { store }
    }
}

impl SyncChannel for StorageChannel {
    fn name(&self) -> &'static str {
        "storage"
    }

    fn notify(&self, refresh: &CartRefresh) -> StorefrontResult<()> {
        self.store
            .put(CART_LAST_UPDATED_KEY, &refresh.stored_value())
    }
}

/// Open-then-close nudge on the cart panel so it re-reads its contents
pub struct PanelFlashChannel {
    panel: Arc<dyn CartPanel>,
}

impl PanelFlashChannel {
    pub fn new(panel: Arc<dyn CartPanel>) -> Self {
        Self { panel }
    }
}

impl SyncChannel for PanelFlashChannel {
    fn name(&self) -> &'static str {
        "panel"
    }

    fn notify(&self, _refresh: &CartRefresh) -> StorefrontResult<()> {
        self.panel.set_open(true)?;
        self.panel.set_open(false)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    use shop_core::MemoryStore;

    use super::*;

    #[test]
    fn test_callback_channel_invokes_callback() {
        let count = Arc::new(AtomicU32::new(0));
        let channel = CallbackChannel::new({
            let count = Arc::clone(&count);
            Arc::new(move || {
                count.fetch_add(1, Ordering::SeqCst);
            })
        });

        channel.notify(&CartRefresh::now("test")).unwrap();
        channel.notify(&CartRefresh::now("test")).unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert!(channel.is_primary());
    }

    #[tokio::test]
    async fn test_broadcast_channel_delivers_event() {
        let (tx, mut rx) = broadcast::channel(8);
        let channel = BroadcastChannel::new(tx);

        channel.notify(&CartRefresh::now("product-page")).unwrap();

        let received = rx.try_recv().unwrap();
        assert_eq!(received.source, "product-page");
        assert!(channel.is_primary());
    }

    #[tokio::test]
    async fn test_broadcast_channel_without_receivers_is_closed() {
        let (tx, rx) = broadcast::channel(8);
        drop(rx);
        let channel = BroadcastChannel::new(tx);

        let err = channel.notify(&CartRefresh::now("test")).unwrap_err();
        assert!(matches!(err, StorefrontError::ChannelClosed(_)));
    }

    #[test]
    fn test_storage_channel_writes_timestamp() {
        let store = Arc::new(MemoryStore::new());
        let channel = StorageChannel::new(Arc::clone(&store) as Arc<dyn SharedStore>);

        let refresh = CartRefresh::now("product-page");
        channel.notify(&refresh).unwrap();

        assert_eq!(
            store.get(CART_LAST_UPDATED_KEY).unwrap(),
            Some(refresh.stored_value())
        );
        assert!(!channel.is_primary());
    }

    #[test]
    fn test_panel_channel_flashes_open_then_closed() {
        struct RecordingPanel {
            states: Mutex<Vec<bool>>,
        }

        impl CartPanel for RecordingPanel {
            fn set_open(&self, open: bool) -> StorefrontResult<()> {
                let mut states = self.states.lock().unwrap();
                states.push(open);
                Ok(())
            }
        }

        let panel = Arc::new(RecordingPanel {
            states: Mutex::new(Vec::new()),
        });
        let channel = PanelFlashChannel::new(Arc::clone(&panel) as Arc<dyn CartPanel>);

        channel.notify(&CartRefresh::now("test")).unwrap();

        assert_eq!(*panel.states.lock().unwrap(), vec![true, false]);
    }
}
