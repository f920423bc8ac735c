//! Cache Config

use clap::Args;
use lufei_app::cache::{CacheNamespaces, DEFAULT_CART_NAMESPACE, DEFAULT_CHECKOUT_NAMESPACE};

/// Redis settings.
#[derive(Debug, Args)]
pub struct CacheConfig {
    /// Redis connection string
    #[arg(long, env = "REDIS_URL", hide_env_values = true)]
    pub redis_url: String,

    /// Hash holding shopping carts
    #[arg(long, env = "CART_NAMESPACE", default_value = DEFAULT_CART_NAMESPACE)]
    pub cart_namespace: String,

    /// Hash holding checkout summaries
    #[arg(long, env = "CHECKOUT_NAMESPACE", default_value = DEFAULT_CHECKOUT_NAMESPACE)]
    pub checkout_namespace: String,
}

impl CacheConfig {
    #[must_use]
    pub fn namespaces(&self) -> CacheNamespaces {
        CacheNamespaces {
            cart: self.cart_namespace.clone(),
            checkout: self.checkout_namespace.clone(),
        }
    }
}
