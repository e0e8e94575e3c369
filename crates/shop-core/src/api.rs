//! # Storefront API Seams
//!
//! Trait boundaries between page logic and whatever backs the catalog
//! and cart. Production wires HTTP clients here; tests wire fixtures.

use async_trait::async_trait;

use crate::error::StorefrontResult;
use crate::product::Product;

/// Read side of the catalog
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Fetch a single product by id
    async fn fetch_product(&self, product_id: &str) -> StorefrontResult<Product>;
}

/// Write side of the cart plus the badge count
#[async_trait]
pub trait CartApi: Send + Sync {
    /// Add `quantity` units of a product to the cart
    async fn add_item(&self, product_id: &str, quantity: u32) -> StorefrontResult<()>;

    /// Total number of units across the cart
    async fn item_count(&self) -> StorefrontResult<u32>;
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::StorefrontError;

    struct SingleProduct {
        product: Product,
    }

    #[async_trait]
    impl ProductApi for SingleProduct {
        async fn fetch_product(&self, product_id: &str) -> StorefrontResult<Product> {
            if product_id == self.product.id {
                Ok(self.product.clone())
            } else {
                Err(StorefrontError::ProductUnavailable {
                    product_id: product_id.to_string(),
                })
            }
        }
    }

    struct CountingCart {
        items: Mutex<Vec<(String, u32)>>,
    }

    #[async_trait]
    impl CartApi for CountingCart {
        async fn add_item(&self, product_id: &str, quantity: u32) -> StorefrontResult<()> {
            let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
            items.push((product_id.to_string(), quantity));
            Ok(())
        }

        async fn item_count(&self) -> StorefrontResult<u32> {
            let items = self.items.lock().unwrap_or_else(|e| e.into_inner());
            Ok(items.iter().map(|(_, quantity)| *quantity).sum())
        }
    }

    #[tokio::test]
    async fn test_product_api_miss_is_unavailable() {
        let api = SingleProduct {
            product: Product::new("tee-classic", "Classic Tee", 25.0),
        };

        assert!(api.fetch_product("tee-classic").await.is_ok());

        let err = api.fetch_product("no-such-id").await.unwrap_err();
        assert!(matches!(err, StorefrontError::ProductUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_cart_api_counts_units() {
        let cart = CountingCart {
            items: Mutex::new(Vec::new()),
        };

        cart.add_item("tee-classic", 2).await.unwrap();
        cart.add_item("cap-snap", 3).await.unwrap();

        assert_eq!(cart.item_count().await.unwrap(), 5);
    }
}
