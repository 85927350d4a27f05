//! Wishlist Item Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod move_to_cart;
