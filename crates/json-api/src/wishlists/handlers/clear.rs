//! Clear Wishlist Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::models::ClearedResponse, errors::ApiError, extensions::*, state::State,
    wishlists::errors::into_api_error,
};

/// Clear Wishlist Handler
#[endpoint(
    tags("wishlists"),
    summary = "Clear Wishlist",
    responses(
        (status_code = StatusCode::OK, description = "Wishlist cleared"),
    ),
)]
#[tracing::instrument(
    name = "wishlists.clear",
    skip(depot),
    fields(user_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ClearedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;

    tracing::Span::current().record("user_id", tracing::field::display(user));

    let removed = state
        .app
        .wishlists
        .clear(user)
        .await
        .map_err(into_api_error)?;

    Ok(Json(ClearedResponse { removed }))
}
