//! # Pricing Engine
//!
//! Pure quantity-tier pricing for the product page. Quotes are recomputed
//! from scratch on every call; there is no cached state to invalidate.

use crate::product::Product;
use serde::{Deserialize, Serialize};

/// A complete price breakdown for a (product, quantity) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Whether the wholesale tier applies at this quantity
    pub is_wholesale: bool,

    /// Effective per-unit price
    pub unit_price: f64,

    /// Line total at the effective unit price
    pub total_price: f64,

    /// Markdown percentage from the reference price, 0 when none
    pub discount_percentage: u8,

    /// Amount saved versus paying retail for the same quantity
    pub savings_vs_retail: f64,

    /// Units still needed to reach the wholesale tier
    pub units_until_wholesale: u32,
}

impl PriceQuote {
    /// Price a product at the given quantity.
    ///
    /// The wholesale tier applies exactly when the tier is enabled and the
    /// quantity meets the minimum order quantity; the tier price itself is
    /// not compared against retail. A tier priced at or above retail still
    /// applies, and `savings_vs_retail` goes to zero or negative in that
    /// case rather than being clamped.
    ///
    /// Stock is not consulted here. Quantity clamping happens in the
    /// selector before a quote is requested.
    pub fn evaluate(product: &Product, quantity: u32) -> Self {
        let is_wholesale = product.wholesale_enabled && quantity >= product.moq;

        let unit_price = if is_wholesale {
            product.wholesale_price.unwrap_or(product.price)
        } else {
            product.price
        };

        Self {
            is_wholesale,
            unit_price,
            total_price: quantity as f64 * unit_price,
            discount_percentage: discount_percentage(product.price, product.old_price),
            savings_vs_retail: quantity as f64 * (product.price - unit_price),
            units_until_wholesale: product.moq.saturating_sub(quantity),
        }
    }

    /// True when the quote reflects an actual saving over retail
    pub fn has_savings(&self) -> bool {
        self.savings_vs_retail > 0.0
    }
}

/// Markdown percentage from a reference price, rounded to the nearest whole
/// percent. A reference at or below the current price means no discount.
pub fn discount_percentage(price: f64, old_price: Option<f64>) -> u8 {
    match old_price {
        Some(old) if old > price => (((old - price) / old) * 100.0).round() as u8,
        _ => 0,
    }
}
