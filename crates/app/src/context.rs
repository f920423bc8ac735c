//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    cache::{CacheError, CacheNamespaces, CacheStore, RedisCacheStore},
    database,
    domain::{
        accounts::{AccountsService, PgAccountsService},
        carts::{CacheCartsService, CartsService},
        checkout::{CacheCheckoutService, CheckoutService},
        coupons::{CouponsService, PgCouponsService},
        courses::{CoursesService, PgCoursesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to connect to cache")]
    Cache(#[source] CacheError),
}

#[derive(Clone)]
pub struct AppContext {
    pub accounts: Arc<dyn AccountsService>,
    pub courses: Arc<dyn CoursesService>,
    pub coupons: Arc<dyn CouponsService>,
    pub carts: Arc<dyn CartsService>,
    pub checkout: Arc<dyn CheckoutService>,
}

impl AppContext {
    /// Build application context from a database URL and a Redis URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing the database or cache connection fails.
    pub async fn connect(
        database_url: &str,
        redis_url: &str,
        namespaces: CacheNamespaces,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(database_url)
            .await
            .map_err(AppInitError::Database)?;

        let cache = RedisCacheStore::connect(redis_url)
            .await
            .map_err(AppInitError::Cache)?;

        Ok(Self::from_parts(
            Arc::new(PgAccountsService::new(pool.clone())),
            Arc::new(PgCoursesService::new(pool.clone())),
            Arc::new(PgCouponsService::new(pool)),
            Arc::new(cache),
            namespaces,
        ))
    }

    /// Wire the cache-backed services on top of the given stores.
    #[must_use]
    pub fn from_parts(
        accounts: Arc<dyn AccountsService>,
        courses: Arc<dyn CoursesService>,
        coupons: Arc<dyn CouponsService>,
        cache: Arc<dyn CacheStore>,
        namespaces: CacheNamespaces,
    ) -> Self {
        let carts: Arc<dyn CartsService> = Arc::new(CacheCartsService::new(
            cache.clone(),
            courses.clone(),
            namespaces.cart,
        ));

        let checkout = Arc::new(CacheCheckoutService::new(
            cache,
            courses.clone(),
            carts.clone(),
            coupons.clone(),
            namespaces.checkout,
        ));

        Self {
            accounts,
            courses,
            coupons,
            carts,
            checkout,
        }
    }
}
