//! Test support: in-memory repositories, a service context built on them, and a
//! containerised database for repository tests.

pub(crate) mod fakes;
pub(crate) mod helpers;

pub(crate) use context::TestContext;
