//! # Quantity Selection
//!
//! Clamped quantity state for the product page selector.

use serde::{Deserialize, Serialize};

/// Quantity selector with a floor of 1 and a stock ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantitySelector {
    quantity: u32,
    stock: u32,
}

impl QuantitySelector {
    /// Create a selector starting at quantity 1
    pub fn new(stock: u32) -> Self {
        Self { quantity: 1, stock }
    }

    /// Current quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Stock ceiling this selector clamps against
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Step up by one. The ceiling only applies when stock is positive; a
    /// zero-stock product is blocked at the purchase action instead, so
    /// the selector stays unbounded there.
    pub fn increment(&mut self) -> u32 {
        if self.stock == 0 || self.quantity < self.stock {
            self.quantity += 1;
        }
        self.quantity
    }

    /// Step down by one, never below 1
    pub fn decrement(&mut self) -> u32 {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
        self.quantity
    }

    /// Set directly, clamped into `[1, stock]`
    pub fn set(&mut self, quantity: u32) -> u32 {
        let mut clamped = quantity.max(1);
        if self.stock > 0 {
            clamped = clamped.min(self.stock);
        }
        self.quantity = clamped;
        self.quantity
    }

    /// True when the + control should be disabled
    pub fn at_ceiling(&self) -> bool {
        self.stock > 0 && self.quantity >= self.stock
    }
}
