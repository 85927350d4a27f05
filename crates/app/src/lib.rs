//! Shared application domain and persistence modules.

pub mod cache;
pub mod context;
pub mod database;
pub mod domain;
pub mod ids;

#[cfg(test)]
mod test;
