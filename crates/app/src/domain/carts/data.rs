//! Cart Data

use storefront::{quantity::Quantity, tables::ProductTable, variant::Variant};

use crate::domain::{carts::records::ProductSnapshot, products::records::ProductId, users::UserId};

/// New Cart Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub product_id: ProductId,
    pub table: ProductTable,
    pub quantity: Quantity,
    pub variant: Variant,
}

/// Row to insert for a cart line that did not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CartItemInsert {
    pub user: UserId,
    pub product_id: ProductId,
    pub table: ProductTable,
    pub quantity: Quantity,
    pub variant: Variant,
    pub snapshot: ProductSnapshot,
    pub stock_checked: u32,
}
