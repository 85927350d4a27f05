//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::carts::records::CartItemId;

use crate::{carts::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Remove Cart Item Handler
#[endpoint(
    tags("carts"),
    summary = "Remove Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Cart line removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart line not found"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.delete",
    skip(item, depot),
    fields(
        user_id = tracing::field::Empty,
        item_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    item: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let item = CartItemId::from_i64(item.into_inner());

    let span = tracing::Span::current();

    span.record("user_id", tracing::field::display(user));
    span.record("item_id", tracing::field::display(item));

    state
        .app
        .carts
        .remove_item(user, item)
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::OK)
}
