//! Errors

use storefront_app::domain::carts::CartsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: CartsServiceError) -> ApiError {
    match error {
        CartsServiceError::NotFound => ApiError::not_found("Cart item not found"),
        CartsServiceError::ProductNotFound => ApiError::not_found("Product not found"),
        CartsServiceError::ProductInactive => {
            ApiError::unprocessable("Product is not available")
        }
        CartsServiceError::InsufficientStock { available, .. } => {
            ApiError::insufficient_stock(available)
        }
        CartsServiceError::AlreadyExists => {
            ApiError::conflict("Cart item already exists, please retry")
        }
        CartsServiceError::InvalidReference
        | CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData => {
            ApiError::unprocessable("Invalid cart item data")
        }
        CartsServiceError::Sql(source) => ApiError::internal("cart storage error", source),
    }
}
