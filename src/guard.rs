//! Stock and validity guard
//!
//! Every cart or wishlist write re-reads the product from its table and passes it
//! through here first. The check is a plain read-then-decide: nothing is reserved, so
//! two concurrent writes can both pass against the same last unit.

use thiserror::Error;

use crate::products::Availability;

/// Reasons a product cannot take a cart or wishlist line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuardError {
    /// No such product in the named table.
    #[error("product not found")]
    NotFound,

    /// The product exists but is not sellable.
    #[error("product is not available")]
    Inactive,

    /// Fewer units in stock than requested.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock {
        /// Units requested (the merged line quantity for carts).
        requested: u32,

        /// Units in stock.
        available: u32,
    },
}

/// Ensure the product exists and is active.
///
/// # Errors
///
/// Returns `GuardError::NotFound` or `GuardError::Inactive`.
pub fn ensure_available(product: Option<&Availability>) -> Result<&Availability, GuardError> {
    let product = product.ok_or(GuardError::NotFound)?;

    if !product.active {
        return Err(GuardError::Inactive);
    }

    Ok(product)
}

/// Ensure `requested` units can be taken from stock.
///
/// # Errors
///
/// Returns `GuardError::InsufficientStock` when `requested` exceeds the stock level.
pub fn ensure_stock(product: &Availability, requested: u32) -> Result<(), GuardError> {
    if requested > product.stock {
        return Err(GuardError::InsufficientStock {
            requested,
            available: product.stock,
        });
    }

    Ok(())
}

/// Existence, active flag and stock in one call.
///
/// # Errors
///
/// Returns the first failing check.
pub fn validate(product: Option<&Availability>, requested: u32) -> Result<(), GuardError> {
    ensure_stock(ensure_available(product)?, requested)
}
