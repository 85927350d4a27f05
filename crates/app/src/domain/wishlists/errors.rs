//! Wishlists service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use storefront::{guard::GuardError, resolver::DuplicateLine};
use thiserror::Error;

use crate::domain::carts::CartsServiceError;

#[derive(Debug, Error)]
pub enum WishlistsServiceError {
    #[error("wishlist item not found")]
    NotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("product is not available")]
    ProductInactive,

    #[error("product is already in the wishlist")]
    AlreadyInWishlist,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error(transparent)]
    Cart(#[from] CartsServiceError),
}

impl From<Error> for WishlistsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyInWishlist,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<GuardError> for WishlistsServiceError {
    fn from(error: GuardError) -> Self {
        match error {
            GuardError::NotFound => Self::ProductNotFound,
            GuardError::Inactive | GuardError::InsufficientStock { .. } => Self::ProductInactive,
        }
    }
}

impl From<DuplicateLine> for WishlistsServiceError {
    fn from(_: DuplicateLine) -> Self {
        Self::AlreadyInWishlist
    }
}
