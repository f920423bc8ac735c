//! Key-value cache holding per-user JSON state.
//!
//! Each namespace is a hash: one field per user id, one JSON document per
//! field. Writers that depend on the current value go through
//! [`CacheStore::compare_and_swap`] so concurrent requests for the same user
//! cannot silently overwrite each other.

mod errors;
mod memory;
mod namespaces;
mod redis_store;
mod store;

pub use errors::CacheError;
pub use memory::MemoryCacheStore;
pub use namespaces::{CacheNamespaces, DEFAULT_CART_NAMESPACE, DEFAULT_CHECKOUT_NAMESPACE};
pub use redis_store::RedisCacheStore;
pub use store::CacheStore;
