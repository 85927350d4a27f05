//! Add Wishlist Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::wishlists::data::NewWishlistItem;

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    validation::Validator,
    wishlists::{errors::into_api_error, models::WishlistItemResponse},
};

/// Add Wishlist Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddWishlistItemRequest {
    pub product_id: Option<i64>,

    /// One of `products_women`, `products_men`, `products_kids`
    pub product_table: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
}

impl AddWishlistItemRequest {
    fn validate(self) -> Result<NewWishlistItem, ApiError> {
        let mut validator = Validator::default();

        let product_id = validator.product_id(self.product_id);
        let table = validator.product_table(self.product_table.as_deref());
        let variant = validator.variant(self.color, self.size);

        let item = product_id
            .zip(table)
            .map(|(product_id, table)| NewWishlistItem {
                product_id,
                table,
                variant,
            });

        validator.finish(item)
    }
}

/// Add Wishlist Item Handler
///
/// Saves a product variant for later. Stock is not checked.
#[endpoint(
    tags("wishlists"),
    summary = "Add Item to Wishlist",
    responses(
        (status_code = StatusCode::CREATED, description = "Wishlist line created"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Product variant already in wishlist"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed or product inactive"),
    ),
)]
#[tracing::instrument(
    name = "wishlists.items.create",
    skip(json, depot, res),
    fields(
        user_id = tracing::field::Empty,
        product_id = tracing::field::Empty,
        product_table = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddWishlistItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<WishlistItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let item = json.into_inner().validate()?;

    let span = tracing::Span::current();

    span.record("user_id", tracing::field::display(user));
    span.record("product_id", tracing::field::display(item.product_id));
    span.record("product_table", tracing::field::display(item.table));

    let line = state
        .app
        .wishlists
        .add_item(user, item)
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/wishlist/items/{}", line.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(line.into()))
}
