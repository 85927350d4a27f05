//! Cart Models

use serde::{Deserialize, Serialize};

use crate::domain::carts::records::CartItemRecord;

/// A user's cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub items: Vec<CartItemRecord>,
    pub summary: CartSummary,
}

impl Cart {
    #[must_use]
    pub fn new(items: Vec<CartItemRecord>) -> Self {
        let summary = CartSummary::from_items(&items);

        Self { items, summary }
    }
}

/// Line count, unit count and subtotal of a cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub lines: u32,
    pub total_quantity: u32,

    /// Sum of snapshot price times quantity, in minor units.
    pub subtotal: u64,
}

impl CartSummary {
    #[must_use]
    pub fn from_items(items: &[CartItemRecord]) -> Self {
        items.iter().fold(Self::default(), |summary, item| Self {
            lines: summary.lines.saturating_add(1),
            total_quantity: summary.total_quantity.saturating_add(item.quantity.get()),
            subtotal: summary.subtotal.saturating_add(item.line_total()),
        })
    }
}
