//! Item resolver
//!
//! Storage narrows a user's lines down to one product in one table; the exact variant
//! match happens here, because either side may leave color or size unset.

use thiserror::Error;

use crate::{quantity::Quantity, tables::ProductTable, variant::Variant};

/// A stored cart or wishlist line, as far as resolution is concerned.
pub trait VariantLine {
    /// Product id the line points at.
    fn product_id(&self) -> i64;

    /// Table the product lives in.
    fn product_table(&self) -> ProductTable;

    /// The line's variant.
    fn variant(&self) -> &Variant;
}

/// What to do with an add-to-cart request.
#[derive(Debug, PartialEq, Eq)]
pub enum CartResolution<'a, L> {
    /// Merge into `line`, leaving it at `quantity`.
    Merge {
        /// Matching line.
        line: &'a L,

        /// Quantity after merging, clamped at `Quantity::MAX`.
        quantity: Quantity,
    },

    /// No matching line; insert a new one.
    Insert {
        /// Quantity of the new line.
        quantity: Quantity,
    },
}

impl<L> CartResolution<'_, L> {
    /// The quantity the line will hold after the write.
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        match self {
            Self::Merge { quantity, .. } | Self::Insert { quantity } => *quantity,
        }
    }
}

/// The wishlist already holds this product variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("product is already in the wishlist")]
pub struct DuplicateLine;

/// Find the line matching `(product_id, table, variant)`.
pub fn find_existing<'a, L: VariantLine>(
    lines: &'a [L],
    product_id: i64,
    table: ProductTable,
    variant: &Variant,
) -> Option<&'a L> {
    lines.iter().find(|line| {
        line.product_id() == product_id
            && line.product_table() == table
            && line.variant() == variant
    })
}

/// Decide between merging into `existing` and inserting a new line.
pub fn resolve_cart<L>(existing: Option<&L>, requested: Quantity) -> CartResolution<'_, L>
where
    L: VariantLine + HasQuantity,
{
    match existing {
        Some(line) => CartResolution::Merge {
            line,
            quantity: line.quantity().merge(requested),
        },
        None => CartResolution::Insert {
            quantity: requested,
        },
    }
}

/// Wishlists reject duplicates instead of merging.
///
/// # Errors
///
/// Returns `DuplicateLine` when a matching line already exists.
pub fn resolve_wishlist<L: VariantLine>(existing: Option<&L>) -> Result<(), DuplicateLine> {
    existing.map_or(Ok(()), |_| Err(DuplicateLine))
}

/// A line that carries a quantity.
pub trait HasQuantity {
    /// Current quantity.
    fn quantity(&self) -> Quantity;
}
