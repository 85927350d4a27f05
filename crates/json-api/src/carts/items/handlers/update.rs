//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::quantity::Quantity;
use storefront_app::domain::carts::records::CartItemId;

use crate::{
    carts::{errors::into_api_error, models::CartItemResponse},
    errors::ApiError,
    extensions::*,
    state::State,
    validation::Validator,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// The new quantity, between 1 and 10
    pub quantity: Option<i64>,
}

impl UpdateCartItemRequest {
    fn validate(self) -> Result<Quantity, ApiError> {
        let mut validator = Validator::default();
        let quantity = validator.quantity(self.quantity);

        validator.finish(quantity)
    }
}

/// Update Cart Item Handler
///
/// Replaces a line's quantity after re-checking live stock.
#[endpoint(
    tags("carts"),
    summary = "Update Cart Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Cart line updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart line or product not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed, product inactive or insufficient stock"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.update",
    skip(item, json, depot),
    fields(
        user_id = tracing::field::Empty,
        item_id = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    item: PathParam<i64>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let item = CartItemId::from_i64(item.into_inner());
    let quantity = json.into_inner().validate()?;

    let span = tracing::Span::current();

    span.record("user_id", tracing::field::display(user));
    span.record("item_id", tracing::field::display(item));
    span.record("quantity", tracing::field::display(quantity));

    let line = state
        .app
        .carts
        .update_item(user, item, quantity)
        .await
        .map_err(into_api_error)?;

    Ok(Json(line.into()))
}
