//! Wishlist Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use storefront::{resolver::VariantLine, tables::ProductTable, variant::Variant};

use crate::{
    domain::{carts::records::ProductSnapshot, products::records::ProductId, users::UserId},
    ids::TypedId,
};

/// Wishlist Item Id
pub type WishlistItemId = TypedId<WishlistItemRecord>;

/// WishlistItem Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItemRecord {
    pub id: WishlistItemId,
    pub user: UserId,
    pub product_id: ProductId,
    pub product_table: ProductTable,
    pub variant: Variant,
    pub snapshot: ProductSnapshot,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl VariantLine for WishlistItemRecord {
    fn product_id(&self) -> i64 {
        self.product_id.into_i64()
    }

    fn product_table(&self) -> ProductTable {
        self.product_table
    }

    fn variant(&self) -> &Variant {
        &self.variant
    }
}
