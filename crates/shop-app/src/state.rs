//! # Application Wiring
//!
//! Assembles the API clients, the event bus, the shared store, the cart
//! badge, and the notifier into one context the binary and tests run on.

use std::sync::Arc;

use shop_client::{ApiConfig, CartClient, ProductClient};
use shop_core::{
    CartApi, CartPanel, CartRefresh, MemoryStore, ProductApi, SharedStore, StorefrontResult,
};
use shop_sync::{CartSyncNotifier, SyncContext};
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::badge::CartBadge;
use crate::fixtures::{load_catalog, FixtureCartApi, FixtureProductApi};

/// Capacity of the in-process cart event bus
const EVENT_BUS_CAPACITY: usize = 16;

/// Cart panel that only logs; the demo has no overlay to slide out
struct LoggingPanel;

impl CartPanel for LoggingPanel {
    fn set_open(&self, open: bool) -> StorefrontResult<()> {
        debug!("Cart panel {}", if open { "opened" } else { "closed" });
        Ok(())
    }
}

/// Fully wired application context
pub struct AppContext {
    /// Product source
    pub products: Arc<dyn ProductApi>,
    /// Cart backend
    pub cart: Arc<dyn CartApi>,
    /// Fan-out notifier for cart changes
    pub notifier: Arc<CartSyncNotifier>,
    /// Shared store the storage channel writes into
    pub store: Arc<MemoryStore>,
    /// Event bus other surfaces can subscribe to
    pub bus: broadcast::Sender<CartRefresh>,
    /// Header cart badge, kept current over the bus
    pub badge: Arc<CartBadge>,
}

impl AppContext {
    /// Wire against the live backend configured in the environment.
    ///
    /// Must run inside a tokio runtime; the badge listener is spawned
    /// here.
    pub fn from_env() -> StorefrontResult<Self> {
        dotenvy::dotenv().ok();

        let config = ApiConfig::from_env()?;
        info!("Storefront backend: {}", config.base_url);

        let products = Arc::new(ProductClient::new(config.clone())) as Arc<dyn ProductApi>;
        let cart = Arc::new(CartClient::new(config)) as Arc<dyn CartApi>;

        Ok(Self::assemble(products, cart))
    }

    /// Wire against the bundled catalog, no backend required
    pub fn with_fixtures() -> anyhow::Result<Self> {
        let catalog = load_catalog()?;
        info!("Fixture catalog: {} products", catalog.products.len());

        let products = Arc::new(FixtureProductApi::new(catalog.clone())) as Arc<dyn ProductApi>;
        let cart = Arc::new(FixtureCartApi::new(catalog)) as Arc<dyn CartApi>;

        Ok(Self::assemble(products, cart))
    }

    /// Wire explicit API implementations (used by tests)
    pub fn assemble(products: Arc<dyn ProductApi>, cart: Arc<dyn CartApi>) -> Self {
        let (bus, _) = broadcast::channel(EVENT_BUS_CAPACITY);
        let store = Arc::new(MemoryStore::new());

        let badge = Arc::new(CartBadge::new(Arc::clone(&cart)));
        Arc::clone(&badge).listen(bus.subscribe());

        let context = SyncContext::new()
            .with_event_bus(bus.clone())
            .with_store(Arc::clone(&store) as Arc<dyn SharedStore>)
            .with_cart_panel(Arc::new(LoggingPanel));

        let notifier = Arc::new(CartSyncNotifier::from_context(context));

        Self {
            products,
            cart,
            notifier,
            store,
            bus,
            badge,
        }
    }
}
