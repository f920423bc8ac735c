//! Redis cache stores inside one shared container

use std::{
    env,
    sync::atomic::{AtomicUsize, Ordering},
};

use once_cell::sync::Lazy;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::redis::Redis as RedisImage;
use tokio::sync::OnceCell;

use crate::cache::RedisCacheStore;

static REDIS_CONTAINER: Lazy<OnceCell<ContainerAsync<RedisImage>>> = Lazy::new(OnceCell::new);

static NAMESPACE_COUNTER: AtomicUsize = AtomicUsize::new(0);

async fn start_redis() -> ContainerAsync<RedisImage> {
    RedisImage::default()
        .start()
        .await
        .expect("Failed to start Redis container")
}

async fn server_url() -> String {
    let container = REDIS_CONTAINER.get_or_init(start_redis).await;

    let port = container
        .get_host_port_ipv4(6379)
        .await
        .expect("Failed to get container port");

    let host = env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("redis://{host}:{port}")
}

/// A connected store plus a hash name no other test uses.
#[derive(Debug)]
pub(crate) struct TestRedis {
    pub(crate) store: RedisCacheStore,
    pub(crate) namespace: String,
}

impl TestRedis {
    pub(crate) async fn new() -> Self {
        let store = RedisCacheStore::connect(&server_url().await)
            .await
            .expect("Failed to connect to Redis");

        let namespace = format!(
            "lufei_test_{}_{}",
            std::process::id(),
            NAMESPACE_COUNTER.fetch_add(1, Ordering::Relaxed)
        );

        Self { store, namespace }
    }
}
