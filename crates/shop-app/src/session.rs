//! # Product Page Session
//!
//! The headless product-detail flow: one product snapshot, a clamped
//! quantity selector, live price quotes, and the add/buy actions with
//! their cart-sync side effects.

use std::fmt;
use std::sync::Arc;

use shop_core::{
    CartApi, Notice, PriceQuote, Product, ProductApi, QuantitySelector, StorefrontError,
    StorefrontResult,
};
use shop_sync::{CartSyncNotifier, ResyncGuard};
use tracing::{info, instrument, warn};

/// Source tag carried on every cart refresh this page emits
const PAGE_SOURCE: &str = "product-page";

/// Path the caller navigates to after a successful buy-now
pub const CHECKOUT_PATH: &str = "/checkout";

/// One shopper's view of one product.
///
/// The product is fetched once at load time; every quote after that is
/// computed from the snapshot. Dropping the page also drops the held
/// resync guard, cancelling a still-pending delayed re-notification.
pub struct ProductPage {
    product: Product,
    selector: QuantitySelector,
    cart: Arc<dyn CartApi>,
    notifier: Arc<CartSyncNotifier>,
    notices: Vec<Notice>,
    pending_resync: Option<ResyncGuard>,
}

impl fmt::Debug for ProductPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductPage")
            .field("product", &self.product)
            .field("selector", &self.selector)
            .field("notices", &self.notices)
            .field("pending_resync", &self.pending_resync)
            .finish_non_exhaustive()
    }
}

impl ProductPage {
    /// Fetch the product snapshot and open a session on it.
    ///
    /// A fetch failure propagates so the caller can render the
    /// not-found state; nothing is ever priced without a product.
    #[instrument(skip(products, cart, notifier))]
    pub async fn load(
        products: Arc<dyn ProductApi>,
        cart: Arc<dyn CartApi>,
        notifier: Arc<CartSyncNotifier>,
        product_id: &str,
    ) -> StorefrontResult<Self> {
        let product = products.fetch_product(product_id).await?;
        info!(
            "Product page loaded: id={}, price={}, stock={}",
            product.id, product.price, product.stock
        );

        let selector = QuantitySelector::new(product.stock);

        Ok(Self {
            product,
            selector,
            cart,
            notifier,
            notices: Vec::new(),
            pending_resync: None,
        })
    }

    /// The product snapshot this session works from
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Current selected quantity
    pub fn quantity(&self) -> u32 {
        self.selector.quantity()
    }

    /// Price the current quantity. Recomputed on every call; quotes
    /// carry no cached state.
    pub fn quote(&self) -> PriceQuote {
        PriceQuote::evaluate(&self.product, self.selector.quantity())
    }

    /// Step the quantity up one, returning the new quantity
    pub fn increment_quantity(&mut self) -> u32 {
        self.selector.increment()
    }

    /// Step the quantity down one, returning the new quantity
    pub fn decrement_quantity(&mut self) -> u32 {
        self.selector.decrement()
    }

    /// Set the quantity directly, returning the clamped result
    pub fn set_quantity(&mut self, quantity: u32) -> u32 {
        self.selector.set(quantity)
    }

    /// The "add N more for wholesale pricing" affordance, present while
    /// the tier exists but has not been reached
    pub fn wholesale_prompt(&self) -> Option<String> {
        if !self.product.wholesale_enabled {
            return None;
        }

        let remaining = self.quote().units_until_wholesale;
        if remaining == 0 {
            return None;
        }

        Some(format!("Add {} more for wholesale pricing", remaining))
    }

    /// Add the selected quantity to the cart.
    ///
    /// Stock problems and backend rejections become notices; the return
    /// value says whether the cart actually changed.
    #[instrument(skip(self), fields(product_id = %self.product.id, quantity = self.selector.quantity()))]
    pub async fn add_to_cart(&mut self) -> bool {
        if !self.validate_stock() {
            return false;
        }

        let quantity = self.selector.quantity();
        match self.cart.add_item(&self.product.id, quantity).await {
            Ok(()) => {
                info!(
                    "Added to cart: product={}, quantity={}",
                    self.product.id, quantity
                );
                self.notices.push(Notice::success(format!(
                    "Added {} to your cart.",
                    self.product.name
                )));
                // Replacing the guard cancels any earlier pending resync
                self.pending_resync = Some(self.notifier.notify_cart_changed(PAGE_SOURCE));
                true
            }
            Err(e) => {
                warn!(
                    "Add to cart failed: product={}, error={}",
                    self.product.id, e
                );
                self.notices.push(Notice::from_error(&e));
                false
            }
        }
    }

    /// Add to cart, then hand back the checkout path for navigation.
    /// `None` when the add was blocked or rejected.
    #[instrument(skip(self), fields(product_id = %self.product.id))]
    pub async fn buy_now(&mut self) -> Option<String> {
        if self.add_to_cart().await {
            Some(CHECKOUT_PATH.to_string())
        } else {
            None
        }
    }

    /// Drain the pending notices for rendering
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// True while a delayed resync from the last add is still scheduled
    pub fn has_pending_resync(&self) -> bool {
        self.pending_resync
            .as_ref()
            .map_or(false, |guard| !guard.is_finished())
    }

    fn validate_stock(&mut self) -> bool {
        if self.product.stock == 0 {
            let err = StorefrontError::OutOfStock {
                product_id: self.product.id.clone(),
            };
            warn!("Purchase blocked: {}", err);
            self.notices.push(Notice::from_error(&err));
            return false;
        }

        let quantity = self.selector.quantity();
        if quantity > self.product.stock {
            let err = StorefrontError::InsufficientStock {
                requested: quantity,
                available: self.product.stock,
            };
            warn!("Purchase blocked: {}", err);
            self.notices.push(Notice::from_error(&err));
            return false;
        }

        true
    }
}
