//! Wishlist response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::wishlists::records::WishlistItemRecord;

/// Wishlist Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WishlistItemResponse {
    /// The wishlist line id
    pub id: i64,
    pub product_id: i64,
    pub product_table: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub product_name: String,

    /// Unit price in minor units when the line was created
    pub price: u64,
    pub image: Option<String>,
    pub sku: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<WishlistItemRecord> for WishlistItemResponse {
    fn from(item: WishlistItemRecord) -> Self {
        let (color, size) = item.variant.into_parts();

        Self {
            id: item.id.into_i64(),
            product_id: item.product_id.into_i64(),
            product_table: item.product_table.to_string(),
            color,
            size,
            product_name: item.snapshot.name,
            price: item.snapshot.price,
            image: item.snapshot.image,
            sku: item.snapshot.sku,
            created_at: item.created_at.to_string(),
            updated_at: item.updated_at.to_string(),
        }
    }
}
