//! # Product Types
//!
//! Product snapshot types for the storefront.
//! A snapshot is fetched once per page view; demo catalogs load from
//! `config/products.toml`.

use serde::{Deserialize, Serialize};

/// Stock level at or below which the low-stock warning shows
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Availability bucket derived from the stock level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Bucket a raw stock level
    pub fn from_level(stock: u32) -> Self {
        match stock {
            0 => StockStatus::OutOfStock,
            s if s <= LOW_STOCK_THRESHOLD => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }

    /// Display message for the availability line
    pub fn message(&self, stock: u32) -> String {
        match self {
            StockStatus::OutOfStock => "Out of stock".to_string(),
            StockStatus::LowStock => format!("Only {} left in stock", stock),
            StockStatus::InStock => "In stock".to_string(),
        }
    }
}

/// A product image with display metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default)]
    pub primary: bool,
}

/// A name/value specification row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub name: String,
    pub value: String,
}

/// A product snapshot as served by the storefront backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier (e.g., "hoodie-block")
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Retail unit price
    pub price: f64,

    /// Prior/reference price; drives the discount badge when above `price`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,

    /// Whether a wholesale tier exists for this product
    #[serde(default)]
    pub wholesale_enabled: bool,

    /// Per-unit wholesale price, meaningful only when the tier is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wholesale_price: Option<f64>,

    /// Minimum order quantity for the wholesale tier
    #[serde(default = "default_moq")]
    pub moq: u32,

    /// Units available for purchase
    #[serde(default)]
    pub stock: u32,

    /// Gallery images
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ProductImage>,

    /// Specification rows shown on the detail page
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specifications: Vec<ProductSpec>,

    /// Size attribute, when the product has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Whether this product is live on the storefront
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_moq() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl Product {
    /// Create a retail-only product
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price,
            old_price: None,
            wholesale_enabled: false,
            wholesale_price: None,
            moq: 1,
            stock: 0,
            images: Vec::new(),
            specifications: Vec::new(),
            size: None,
            active: true,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Builder: set the reference price the discount badge compares against
    pub fn with_old_price(mut self, old_price: f64) -> Self {
        self.old_price = Some(old_price);
        self
    }

    /// Builder: enable the wholesale tier
    pub fn with_wholesale(mut self, wholesale_price: f64, moq: u32) -> Self {
        self.wholesale_enabled = true;
        self.wholesale_price = Some(wholesale_price);
        self.moq = moq;
        self
    }

    /// Builder: set available stock
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Builder: add an image (the first one added becomes primary)
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        let primary = self.images.is_empty();
        self.images.push(ProductImage {
            url: url.into(),
            alt: None,
            primary,
        });
        self
    }

    /// Builder: add a specification row
    pub fn with_spec(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.push(ProductSpec {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Builder: set the size attribute
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// True when the reference price makes the current price a markdown
    pub fn is_on_sale(&self) -> bool {
        self.old_price.map(|old| old > self.price).unwrap_or(false)
    }

    /// True when at least one unit is available
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Availability bucket for the detail page
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_level(self.stock)
    }

    /// The primary image, falling back to the first
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images
            .iter()
            .find(|i| i.primary)
            .or_else(|| self.images.first())
    }
}

/// Product catalog (loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    pub products: Vec<Product>,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Add a product to the catalog
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Find a product by ID
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Get all active products
    pub fn active_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.active)
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

/// Format an amount for display (e.g., "$10.00")
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_defaults_match_backend_contract() {
        // A minimal payload leaves wholesale off, moq at 1, product active
        let json = r#"{"id":"tee-classic","name":"Classic Tee","price":25.0}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert!(!product.wholesale_enabled);
        assert_eq!(product.moq, 1);
        assert_eq!(product.stock, 0);
        assert!(product.active);
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_on_sale_requires_higher_reference_price() {
        let marked_down = Product::new("p1", "P1", 90.0).with_old_price(100.0);
        assert!(marked_down.is_on_sale());

        let marked_up = Product::new("p2", "P2", 100.0).with_old_price(90.0);
        assert!(!marked_up.is_on_sale());

        let no_reference = Product::new("p3", "P3", 50.0);
        assert!(!no_reference.is_on_sale());
    }

    #[test]
    fn test_stock_status_buckets() {
        assert_eq!(StockStatus::from_level(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_level(1), StockStatus::LowStock);
        assert_eq!(StockStatus::from_level(5), StockStatus::LowStock);
        assert_eq!(StockStatus::from_level(6), StockStatus::InStock);

        assert_eq!(StockStatus::from_level(3).message(3), "Only 3 left in stock");
        assert_eq!(StockStatus::from_level(0).message(0), "Out of stock");
    }

    #[test]
    fn test_product_builder() {
        let product = Product::new("hoodie-block", "Block Hoodie", 59.0)
            .with_description("Heavyweight fleece hoodie")
            .with_old_price(74.0)
            .with_wholesale(44.0, 5)
            .with_stock(120)
            .with_image("https://cdn.example.com/hoodie-front.jpg")
            .with_image("https://cdn.example.com/hoodie-back.jpg")
            .with_spec("Material", "80% cotton, 20% polyester");

        assert!(product.wholesale_enabled);
        assert_eq!(product.moq, 5);
        assert!(product.is_on_sale());
        assert_eq!(product.primary_image().unwrap().url, "https://cdn.example.com/hoodie-front.jpg");
        assert_eq!(product.specifications.len(), 1);
    }

    #[test]
    fn test_catalog_from_toml() {
        let toml_str = r#"
            [[products]]
            id = "tee-classic"
            name = "Classic Tee"
            price = 25.0
            stock = 200

            [[products]]
            id = "poster-retired"
            name = "Retired Poster"
            price = 12.0
            active = false
        "#;

        let catalog = ProductCatalog::from_toml(toml_str).unwrap();
        assert_eq!(catalog.products.len(), 2);
        assert_eq!(catalog.get("tee-classic").unwrap().stock, 200);
        assert_eq!(catalog.active_products().count(), 1);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(59.0), "$59.00");
        assert_eq!(format_price(19.99), "$19.99");
    }
}
