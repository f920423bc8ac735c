//! Authentication

pub(crate) mod login;
pub(crate) mod middleware;
