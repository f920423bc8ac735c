//! Cache store trait.

use async_trait::async_trait;

use crate::cache::CacheError;

/// Hash-structured key-value store.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Read one field of a namespace.
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>, CacheError>;

    /// Unconditionally write one field of a namespace.
    async fn set(&self, namespace: &str, key: &str, value: &str) -> Result<(), CacheError>;

    /// Write `value` only if the field currently holds `expected`.
    ///
    /// `expected == None` means the field must be absent. Returns `false`
    /// without writing when the stored value differs.
    async fn compare_and_swap(
        &self,
        namespace: &str,
        key: &str,
        expected: Option<&str>,
        value: &str,
    ) -> Result<bool, CacheError>;
}
