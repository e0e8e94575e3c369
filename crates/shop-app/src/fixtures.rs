//! # Offline Fixtures
//!
//! Catalog-backed implementations of the API seams so the demo binary
//! and tests run without a live backend.

use std::sync::Mutex;

use async_trait::async_trait;
use shop_core::{CartApi, Product, ProductApi, ProductCatalog, StorefrontError, StorefrontResult};
use tracing::{info, warn};

/// Product source backed by an in-memory catalog
pub struct FixtureProductApi {
    catalog: ProductCatalog,
}

impl FixtureProductApi {
    pub fn new(catalog: ProductCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ProductApi for FixtureProductApi {
    async fn fetch_product(&self, product_id: &str) -> StorefrontResult<Product> {
        self.catalog
            .get(product_id)
            .filter(|p| p.active)
            .cloned()
            .ok_or_else(|| StorefrontError::ProductUnavailable {
                product_id: product_id.to_string(),
            })
    }
}

/// In-memory cart that enforces the catalog's stock levels the way the
/// real backend would
pub struct FixtureCartApi {
    catalog: ProductCatalog,
    items: Mutex<Vec<(String, u32)>>,
}

impl FixtureCartApi {
    pub fn new(catalog: ProductCatalog) -> Self {
        Self {
            catalog,
            items: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CartApi for FixtureCartApi {
    async fn add_item(&self, product_id: &str, quantity: u32) -> StorefrontResult<()> {
        let product =
            self.catalog
                .get(product_id)
                .ok_or_else(|| StorefrontError::CartRejected {
                    message: "Item no longer available".to_string(),
                })?;

        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        let already: u32 = items
            .iter()
            .filter(|(id, _)| id == product_id)
            .map(|(_, q)| *q)
            .sum();

        if already + quantity > product.stock {
            return Err(StorefrontError::CartRejected {
                message: format!(
                    "Only {} left in stock",
                    product.stock.saturating_sub(already)
                ),
            });
        }

        items.push((product_id.to_string(), quantity));
        Ok(())
    }

    async fn item_count(&self) -> StorefrontResult<u32> {
        let items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        Ok(items.iter().map(|(_, quantity)| *quantity).sum())
    }
}

/// Load the demo catalog from `config/products.toml`
pub fn load_catalog() -> anyhow::Result<ProductCatalog> {
    let config_paths = [
        "config/products.toml",
        "../config/products.toml",
        "../../config/products.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let catalog = ProductCatalog::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            info!("Loaded {} products from {}", catalog.products.len(), path);
            return Ok(catalog);
        }
    }

    warn!("No product catalog found, using empty catalog");
    Ok(ProductCatalog::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_catalog() -> ProductCatalog {
        let mut catalog = ProductCatalog::new();
        catalog.add(Product::new("tee-classic", "Classic Tee", 25.0).with_stock(3));

        let mut retired = Product::new("poster-retired", "Retired Poster", 12.0).with_stock(10);
        retired.active = false;
        catalog.add(retired);

        catalog
    }

    #[tokio::test]
    async fn test_fixture_products_skip_inactive() {
        let api = FixtureProductApi::new(demo_catalog());

        assert!(api.fetch_product("tee-classic").await.is_ok());

        let err = api.fetch_product("poster-retired").await.unwrap_err();
        assert!(matches!(err, StorefrontError::ProductUnavailable { .. }));

        let err = api.fetch_product("no-such-id").await.unwrap_err();
        assert!(matches!(err, StorefrontError::ProductUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_fixture_cart_enforces_stock() {
        let cart = FixtureCartApi::new(demo_catalog());

        cart.add_item("tee-classic", 2).await.unwrap();
        assert_eq!(cart.item_count().await.unwrap(), 2);

        let err = cart.add_item("tee-classic", 2).await.unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::CartRejected { ref message } if message == "Only 1 left in stock"
        ));
        assert_eq!(cart.item_count().await.unwrap(), 2);
    }

    #[test]
    fn test_load_catalog_finds_bundled_file() {
        let catalog = load_catalog().unwrap();
        assert!(catalog.get("hoodie-block").is_some());
    }
}
