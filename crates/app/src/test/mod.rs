//! Test infrastructure

mod cache;

pub(crate) use cache::TestRedis;
pub(crate) use context::TestContext;
