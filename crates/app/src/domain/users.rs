//! Users
//!
//! Users are owned by the upstream identity service; lines only carry their id.

use crate::ids::TypedId;

/// Marker for user ids.
#[derive(Debug)]
pub struct User;

/// User Id
pub type UserId = TypedId<User>;
