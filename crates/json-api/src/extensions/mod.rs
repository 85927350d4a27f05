//! Handler helpers on salvo and service types.
//!
//! `DepotExt` reads shared state and the caller's identity out of the depot, and
//! `ResultExt` turns unexpected failures into logged 500 envelopes.

mod depot;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
