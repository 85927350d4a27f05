//! Get Wishlist Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    wishlists::{errors::into_api_error, models::WishlistItemResponse},
};

/// Get Wishlist Handler
#[endpoint(
    tags("wishlists"),
    summary = "Get Wishlist",
    responses(
        (status_code = StatusCode::OK, description = "Wishlist lines"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<WishlistItemResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;

    let items = state
        .app
        .wishlists
        .get_wishlist(user)
        .await
        .map_err(into_api_error)?;

    Ok(Json(items.into_iter().map(WishlistItemResponse::from).collect()))
}
