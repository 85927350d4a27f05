//! Cart Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use storefront::{
    quantity::Quantity,
    resolver::{HasQuantity, VariantLine},
    tables::ProductTable,
    variant::Variant,
};

use crate::{
    domain::{
        products::records::{ProductId, ProductRecord},
        users::UserId,
    },
    ids::TypedId,
};

/// Cart Item Id
pub type CartItemId = TypedId<CartItemRecord>;

/// Product details copied onto a line when it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub name: String,

    /// Price in minor units.
    pub price: u64,
    pub image: Option<String>,
    pub sku: Option<String>,
}

impl From<&ProductRecord> for ProductSnapshot {
    fn from(product: &ProductRecord) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            sku: product.sku.clone(),
        }
    }
}

/// CartItem Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemRecord {
    pub id: CartItemId,
    pub user: UserId,
    pub product_id: ProductId,
    pub product_table: ProductTable,
    pub quantity: Quantity,
    pub variant: Variant,
    pub snapshot: ProductSnapshot,

    /// Stock level seen by the last guard check.
    pub stock_checked: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartItemRecord {
    /// Snapshot price times quantity.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.snapshot
            .price
            .saturating_mul(u64::from(self.quantity.get()))
    }
}

impl VariantLine for CartItemRecord {
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

impl HasQuantity for CartItemRecord {
    fn quantity(&self) -> Quantity {
        self.quantity
    }
}
