//! Shared application domain, persistence and cache modules.

pub mod cache;
pub mod context;
pub mod database;
pub mod domain;
pub mod ids;

#[cfg(test)]
mod test;
