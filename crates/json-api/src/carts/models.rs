//! Cart response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::carts::{
    models::{Cart, CartSummary},
    records::CartItemRecord,
};

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The cart line id
    pub id: i64,

    /// The product id within its table
    pub product_id: i64,

    /// The table the product lives in
    pub product_table: String,

    /// Units on this line, between 1 and 10
    pub quantity: u32,

    pub color: Option<String>,
    pub size: Option<String>,

    /// Product name when the line was created
    pub product_name: String,

    /// Unit price in minor units when the line was created
    pub price: u64,

    pub image: Option<String>,
    pub sku: Option<String>,

    /// Price times quantity
    pub line_total: u64,

    /// The date and time the line was created
    pub created_at: String,

    /// The date and time the line was last updated
    pub updated_at: String,
}

impl From<CartItemRecord> for CartItemResponse {
    fn from(item: CartItemRecord) -> Self {
        let line_total = item.line_total();
        let (color, size) = item.variant.into_parts();

        Self {
            id: item.id.into_i64(),
            product_id: item.product_id.into_i64(),
            product_table: item.product_table.to_string(),
            quantity: item.quantity.get(),
            color,
            size,
            product_name: item.snapshot.name,
            price: item.snapshot.price,
            image: item.snapshot.image,
            sku: item.snapshot.sku,
            line_total,
            created_at: item.created_at.to_string(),
            updated_at: item.updated_at.to_string(),
        }
    }
}

/// Cart Summary Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartSummaryResponse {
    /// Number of lines
    pub lines: u32,

    /// Units across all lines
    pub total_quantity: u32,

    /// Sum of line totals in minor units
    pub subtotal: u64,
}

impl From<CartSummary> for CartSummaryResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            lines: summary.lines,
            total_quantity: summary.total_quantity,
            subtotal: summary.subtotal,
        }
    }
}

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The user's cart lines
    pub items: Vec<CartItemResponse>,

    pub summary: CartSummaryResponse,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            summary: cart.summary.into(),
        }
    }
}

/// Cleared Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClearedResponse {
    /// Number of lines removed
    pub removed: u64,
}
