//! Move Wishlist Item to Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::quantity::Quantity;
use storefront_app::domain::wishlists::records::WishlistItemId;

use crate::{
    carts::models::CartItemResponse, errors::ApiError, extensions::*, state::State,
    validation::Validator, wishlists::errors::into_api_error,
};

/// Move to Cart Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct MoveToCartRequest {
    /// Units to add, between 1 and 10. Defaults to 1.
    pub quantity: Option<i64>,
}

impl MoveToCartRequest {
    /// The body is optional. An empty one reads as the default request.
    async fn read(req: &mut Request) -> Result<Self, ApiError> {
        let payload = req
            .payload()
            .await
            .map_err(|error| ApiError::malformed_body(error.to_string()))?;

        if payload.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(payload).map_err(|error| ApiError::malformed_json(&error))
    }

    fn validate(self) -> Result<Quantity, ApiError> {
        let mut validator = Validator::default();
        let quantity = validator.quantity_or(self.quantity, Quantity::ONE);

        validator.finish(quantity)
    }
}

/// Move Wishlist Item to Cart Handler
///
/// Adds the line's product variant to the cart under the usual stock rules, then
/// removes it from the wishlist. A rejected add leaves the wishlist untouched.
#[endpoint(
    tags("wishlists"),
    summary = "Move Wishlist Item to Cart",
    request_body = MoveToCartRequest,
    responses(
        (status_code = StatusCode::OK, description = "Cart line created or merged"),
        (status_code = StatusCode::NOT_FOUND, description = "Wishlist line or product not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed, product inactive or insufficient stock"),
    ),
)]
#[tracing::instrument(
    name = "wishlists.items.move_to_cart",
    skip(item, req, depot),
    fields(
        user_id = tracing::field::Empty,
        item_id = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    item: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let item = WishlistItemId::from_i64(item.into_inner());
    let quantity = MoveToCartRequest::read(req).await?.validate()?;

    let span = tracing::Span::current();

    span.record("user_id", tracing::field::display(user));
    span.record("item_id", tracing::field::display(item));
    span.record("quantity", tracing::field::display(quantity));

    let line = state
        .app
        .wishlists
        .move_to_cart(user, item, quantity)
        .await
        .map_err(into_api_error)?;

    Ok(Json(line.into()))
}
