//! Wishlist Data

use storefront::{tables::ProductTable, variant::Variant};

use crate::domain::{carts::records::ProductSnapshot, products::records::ProductId, users::UserId};

/// New Wishlist Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewWishlistItem {
    pub product_id: ProductId,
    pub table: ProductTable,
    pub variant: Variant,
}

/// Row to insert for a new wishlist line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WishlistItemInsert {
    pub user: UserId,
    pub product_id: ProductId,
    pub table: ProductTable,
    pub variant: Variant,
    pub snapshot: ProductSnapshot,
}
