//! Storefront
//!
//! Cart and wishlist consistency rules for a storefront whose products live in three
//! parallel tables: the (color, size) variant key, quantity bounds, the stock and
//! active-flag guard, and the resolver that decides between merging into an existing
//! line and inserting a new one.

pub mod attributes;
pub mod guard;
pub mod prelude;
pub mod products;
pub mod quantity;
pub mod resolver;
pub mod tables;
pub mod variant;
