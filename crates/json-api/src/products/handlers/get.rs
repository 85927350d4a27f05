//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::tables::ProductTable;
use storefront_app::domain::products::records::{ProductId, ProductRecord};

use crate::{
    errors::ApiError, extensions::*, products::errors::into_api_error, state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The product id within its table
    pub id: i64,

    /// The table the product lives in
    pub product_table: String,
    pub name: String,

    /// The price of the product in minor units
    pub price: u64,
    pub image: Option<String>,
    pub sku: Option<String>,

    /// Available sizes
    pub sizes: Vec<String>,

    /// Available colors
    pub colors: Vec<String>,

    /// Whether the product can be added to a cart or wishlist
    pub is_active: bool,

    /// Units in stock
    pub stock: u32,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            id: product.id.into_i64(),
            product_table: product.table.to_string(),
            name: product.name,
            price: product.price,
            image: product.image,
            sku: product.sku,
            sizes: product.sizes,
            colors: product.colors,
            is_active: product.availability.active,
            stock: product.availability.stock,
        }
    }
}

/// Get Product Handler
///
/// Returns a product from one of the three product tables.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown table or product"),
    ),
)]
pub(crate) async fn handler(
    table: PathParam<String>,
    product: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let table = table
        .into_inner()
        .parse::<ProductTable>()
        .map_err(|_ignored| ApiError::not_found("Product not found"))?;

    let product = state
        .app
        .products
        .get_product(table, ProductId::from_i64(product.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(product.into()))
}
