//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    attributes::decode_attribute_list,
    guard::{GuardError, ensure_available, ensure_stock, validate},
    products::{Availability, ProductColumns},
    quantity::{Quantity, QuantityError},
    resolver::{
        CartResolution, DuplicateLine, HasQuantity, VariantLine, find_existing, resolve_cart,
        resolve_wishlist,
    },
    tables::{ProductTable, ProductTableParseError},
    variant::Variant,
};
