//! # shop-wasm
//!
//! WebAssembly bindings for storefront-rs.
//!
//! This crate provides WASM-compatible functions for:
//! - Pricing a product at a quantity client-side
//! - Clamping quantity input against stock
//! - Discount badge percentages
//!
//! Products cross the boundary as JSON strings, matching the shape the
//! storefront backend serves. No networking and no cart state live here;
//! the bindings wrap the pure pricing core only.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { evaluate_pricing, clamp_quantity } from 'storefront-wasm';
//!
//! await init();
//!
//! const quote = JSON.parse(evaluate_pricing(productJson, 5));
//! console.log('Total:', quote.total_price);
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use shop_core::{PriceQuote, Product, QuantitySelector};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module (called automatically)
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Price a product at the given quantity.
///
/// `product_json` is the product snapshot as served by the backend. Returns
/// the quote as a JSON string with `unit_price`, `total_price`,
/// `is_wholesale`, `discount_percentage`, `savings_vs_retail`, and
/// `units_until_wholesale` fields.
#[wasm_bindgen]
pub fn evaluate_pricing(product_json: &str, quantity: u32) -> Result<String, JsValue> {
    evaluate_pricing_impl(product_json, quantity).map_err(|e| JsValue::from_str(&e))
}

fn evaluate_pricing_impl(product_json: &str, quantity: u32) -> Result<String, String> {
    let product: Product =
        serde_json::from_str(product_json).map_err(|e| format!("Invalid product JSON: {}", e))?;

    let quote = PriceQuote::evaluate(&product, quantity);

    serde_json::to_string(&quote).map_err(|e| format!("Failed to serialize quote: {}", e))
}

/// Clamp a requested quantity to the purchasable range.
///
/// The result is at least 1. When `stock` is positive it is also the upper
/// bound; zero stock imposes no ceiling, matching the quantity selector.
#[wasm_bindgen]
pub fn clamp_quantity(quantity: u32, stock: u32) -> u32 {
    let mut selector = QuantitySelector::new(stock);
    selector.set(quantity);
    selector.quantity()
}

/// Markdown percentage for the discount badge, 0 when no reference price
/// or the reference is at or below the current price
#[wasm_bindgen]
pub fn discount_percentage(price: f64, old_price: Option<f64>) -> u8 {
    shop_core::pricing::discount_percentage(price, old_price)
}

/// Log to browser console
#[wasm_bindgen]
pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOODIE_JSON: &str = r#"{
        "id": "hoodie-block",
        "name": "Block Hoodie",
        "price": 59.0,
        "old_price": 74.0,
        "wholesale_enabled": true,
        "wholesale_price": 44.0,
        "moq": 5,
        "stock": 120
    }"#;

    #[test]
    fn test_evaluate_pricing_retail() {
        let quote: serde_json::Value =
            serde_json::from_str(&evaluate_pricing_impl(HOODIE_JSON, 2).unwrap()).unwrap();

        assert_eq!(quote["is_wholesale"], false);
        assert_eq!(quote["unit_price"], 59.0);
        assert_eq!(quote["total_price"], 118.0);
        assert_eq!(quote["units_until_wholesale"], 3);
    }

    #[test]
    fn test_evaluate_pricing_wholesale() {
        let quote: serde_json::Value =
            serde_json::from_str(&evaluate_pricing_impl(HOODIE_JSON, 5).unwrap()).unwrap();

        assert_eq!(quote["is_wholesale"], true);
        assert_eq!(quote["unit_price"], 44.0);
        assert_eq!(quote["total_price"], 220.0);
        assert_eq!(quote["savings_vs_retail"], 75.0);
    }

    #[test]
    fn test_evaluate_pricing_rejects_bad_json() {
        let err = evaluate_pricing_impl("not a product", 1).unwrap_err();
        assert!(err.contains("Invalid product JSON"));
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(500, 120), 120);
        assert_eq!(clamp_quantity(0, 10), 1);
        assert_eq!(clamp_quantity(7, 10), 7);
    }

    #[test]
    fn test_clamp_quantity_zero_stock_has_no_ceiling() {
        assert_eq!(clamp_quantity(3, 0), 3);
    }

    #[test]
    fn test_discount_percentage() {
        assert_eq!(discount_percentage(59.0, Some(74.0)), 20);
        assert_eq!(discount_percentage(59.0, None), 0);
        assert_eq!(discount_percentage(59.0, Some(50.0)), 0);
    }

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
