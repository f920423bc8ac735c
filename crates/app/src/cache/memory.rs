//! In-memory cache store.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::cache::{CacheError, CacheStore};

/// Process-local cache store, used for tests and single-instance setups.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    namespaces: RwLock<FxHashMap<String, FxHashMap<String, String>>>,
}

impl MemoryCacheStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>, CacheError> {
        let namespaces = self.namespaces.read().await;

        Ok(namespaces
            .get(namespace)
            .and_then(|fields| fields.get(key))
            .cloned())
    }

    async fn set(&self, namespace: &str, key: &str, value: &str) -> Result<(), CacheError> {
        let mut namespaces = self.namespaces.write().await;

        namespaces
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }

    async fn compare_and_swap(
        &self,
        namespace: &str,
        key: &str,
        expected: Option<&str>,
        value: &str,
    ) -> Result<bool, CacheError> {
        let mut namespaces = self.namespaces.write().await;
        let fields = namespaces.entry(namespace.to_string()).or_default();

        if fields.get(key).map(String::as_str) != expected {
            return Ok(false);
        }

        fields.insert(key.to_string(), value.to_string());

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn get_missing_field_returns_none() -> TestResult {
        let store = MemoryCacheStore::new();

        assert_eq!(store.get("carts", "1").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn namespaces_are_independent() -> TestResult {
        let store = MemoryCacheStore::new();

        store.set("carts", "1", "a").await?;
        store.set("checkout", "1", "b").await?;

        assert_eq!(store.get("carts", "1").await?.as_deref(), Some("a"));
        assert_eq!(store.get("checkout", "1").await?.as_deref(), Some("b"));

        Ok(())
    }

    #[tokio::test]
    async fn compare_and_swap_requires_absent_field_when_nothing_expected() -> TestResult {
        let store = MemoryCacheStore::new();

        assert!(store.compare_and_swap("carts", "1", None, "a").await?);
        assert!(!store.compare_and_swap("carts", "1", None, "b").await?);
        assert_eq!(store.get("carts", "1").await?.as_deref(), Some("a"));

        Ok(())
    }

    #[tokio::test]
    async fn compare_and_swap_rejects_stale_value() -> TestResult {
        let store = MemoryCacheStore::new();

        store.set("carts", "1", "a").await?;

        assert!(!store.compare_and_swap("carts", "1", Some("stale"), "b").await?);
        assert!(store.compare_and_swap("carts", "1", Some("a"), "c").await?);
        assert_eq!(store.get("carts", "1").await?.as_deref(), Some("c"));

        Ok(())
    }
}
