//! # Cart Sync Contracts
//!
//! Event payload and channel seams for keeping every cart surface
//! (badge, slide-out panel, other tabs) in agreement after a change.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::StorefrontResult;

/// Shared-store key holding the epoch millis of the last cart change
pub const CART_LAST_UPDATED_KEY: &str = "cart_last_updated";

/// One cart-changed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartRefresh {
    /// Epoch milliseconds at which the change happened
    pub timestamp_ms: i64,
    /// Surface that made the change, e.g. "product-page"
    pub source: String,
}

impl CartRefresh {
    /// Stamp an event with the current time
    pub fn now(source: impl Into<String>) -> Self {
        Self {
            timestamp_ms: Utc::now().timestamp_millis(),
            source: source.into(),
        }
    }

    /// Value written under [`CART_LAST_UPDATED_KEY`]
    pub fn stored_value(&self) -> String {
        self.timestamp_ms.to_string()
    }
}

/// One delivery path for a [`CartRefresh`]
pub trait SyncChannel: Send + Sync {
    /// Channel name for logging
    fn name(&self) -> &'static str;

    /// Deliver one refresh event
    fn notify(&self, refresh: &CartRefresh) -> StorefrontResult<()>;

    /// Whether the delayed resync re-fires this channel
    fn is_primary(&self) -> bool {
        false
    }
}

/// Shared handle to a registered channel
pub type BoxedSyncChannel = Arc<dyn SyncChannel>;

/// Durable key/value storage visible across surfaces
pub trait SharedStore: Send + Sync {
    /// Write a value under a key
    fn put(&self, key: &str, value: &str) -> StorefrontResult<()>;

    /// Read a value back, `None` when the key was never written
    fn get(&self, key: &str) -> StorefrontResult<Option<String>>;
}

/// Control over the slide-out cart panel
pub trait CartPanel: Send + Sync {
    /// Open or close the panel
    fn set_open(&self, open: bool) -> StorefrontResult<()>;
}

/// In-process [`SharedStore`] backed by a mutex-guarded map
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SharedStore for MemoryStore {
    fn put(&self, key: &str, value: &str) -> StorefrontResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> StorefrontResult<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }
}
