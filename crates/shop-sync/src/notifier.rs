//! # Cart Sync Notifier
//!
//! Fan-out of cart-changed events to every registered channel, plus a
//! delayed best-effort re-notification of the primary channels for
//! surfaces that missed the first pass.

use std::sync::Arc;
use std::time::Duration;

use shop_core::{BoxedSyncChannel, CartRefresh};
use tracing::{debug, instrument, warn};

use crate::context::SyncContext;
use crate::resync::ResyncGuard;

/// Delay before the primary channels are re-notified
pub const DEFAULT_RESYNC_DELAY: Duration = Duration::from_secs(1);

/// Fan-out notifier for cart changes
pub struct CartSyncNotifier {
    channels: Vec<BoxedSyncChannel>,
    resync_delay: Duration,
}

impl CartSyncNotifier {
    /// Build from an explicit capability set
    pub fn from_context(context: SyncContext) -> Self {
        Self {
            channels: context.into_channels(),
            resync_delay: DEFAULT_RESYNC_DELAY,
        }
    }

    /// Builder: override the resync delay
    pub fn with_resync_delay(mut self, delay: Duration) -> Self {
        self.resync_delay = delay;
        self
    }

    /// Registered channel names, in dispatch order
    pub fn channel_names(&self) -> Vec<&'static str> {
        self.channels.iter().map(|c| c.name()).collect()
    }

    /// Fire every channel with a fresh event, then schedule one delayed
    /// re-notification of the primary channels. A failing channel is
    /// logged and never suppresses the others or reaches the caller.
    ///
    /// Dropping the returned guard cancels a still-pending resync.
    #[instrument(skip(self), fields(channels = self.channels.len()))]
    pub fn notify_cart_changed(&self, source: &str) -> ResyncGuard {
        let refresh = CartRefresh::now(source);
        let delivered = dispatch(&self.channels, &refresh);
        debug!(
            "Cart refresh from '{}' delivered to {}/{} channels",
            source,
            delivered,
            self.channels.len()
        );

        let primaries: Vec<BoxedSyncChannel> = self
            .channels
            .iter()
            .filter(|c| c.is_primary())
            .map(Arc::clone)
            .collect();

        if primaries.is_empty() {
            return ResyncGuard::noop();
        }

        let source = source.to_string();
        let delay = self.resync_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let refresh = CartRefresh::now(&source);
            let delivered = dispatch(&primaries, &refresh);
            debug!(
                "Resync delivered to {}/{} primary channels",
                delivered,
                primaries.len()
            );
        });

        ResyncGuard::new(handle)
    }
}

/// Deliver one event to every channel, isolating failures. Returns the
/// number of successful deliveries.
fn dispatch(channels: &[BoxedSyncChannel], refresh: &CartRefresh) -> usize {
    let mut delivered = 0;
    for channel in channels {
        match channel.notify(refresh) {
            Ok(()) => delivered += 1,
            Err(e) => warn!("Sync channel '{}' failed: {}", channel.name(), e),
        }
    }
    delivered
}
