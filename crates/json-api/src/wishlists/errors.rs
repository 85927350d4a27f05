//! Errors

use storefront_app::domain::wishlists::WishlistsServiceError;

use crate::{carts, errors::ApiError};

pub(crate) fn into_api_error(error: WishlistsServiceError) -> ApiError {
    match error {
        WishlistsServiceError::NotFound => ApiError::not_found("Wishlist item not found"),
        WishlistsServiceError::ProductNotFound => ApiError::not_found("Product not found"),
        WishlistsServiceError::ProductInactive => {
            ApiError::unprocessable("Product is not available")
        }
        WishlistsServiceError::AlreadyInWishlist => {
            ApiError::conflict("Product already in wishlist")
        }
        WishlistsServiceError::InvalidReference
        | WishlistsServiceError::MissingRequiredData
        | WishlistsServiceError::InvalidData => {
            ApiError::unprocessable("Invalid wishlist item data")
        }
        WishlistsServiceError::Sql(source) => {
            ApiError::internal("wishlist storage error", source)
        }
        WishlistsServiceError::Cart(source) => carts::errors::into_api_error(source),
    }
}
