//! Product Handlers

pub(crate) mod get;
