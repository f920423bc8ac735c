//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    cache::CacheStore,
    domain::{
        accounts::records::AccountId,
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartLine},
        },
        courses::{
            CoursesService,
            records::{CourseId, PricePolicyId},
        },
    },
};

/// Read-modify-write cycles attempted before giving up on a contended cart.
const MAX_UPDATE_ATTEMPTS: usize = 8;

/// Cart service storing one JSON cart per user in a cache hash.
#[derive(Clone)]
pub struct CacheCartsService {
    cache: Arc<dyn CacheStore>,
    courses: Arc<dyn CoursesService>,
    namespace: String,
}

impl CacheCartsService {
    #[must_use]
    pub fn new(
        cache: Arc<dyn CacheStore>,
        courses: Arc<dyn CoursesService>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            cache,
            courses,
            namespace: namespace.into(),
        }
    }

    async fn load(&self, key: &str) -> Result<(Option<String>, Option<Cart>), CartsServiceError> {
        let raw = self.cache.get(&self.namespace, key).await?;

        let cart = raw
            .as_deref()
            .map(serde_json::from_str::<Cart>)
            .transpose()?;

        Ok((raw, cart))
    }

    /// Apply `change` to the stored cart and write it back, but only if no one
    /// else wrote the cart in between. Lost races start over from a fresh read.
    ///
    /// Errors returned by `change` abort without writing.
    async fn update<F, T>(&self, account: AccountId, mut change: F) -> Result<T, CartsServiceError>
    where
        F: FnMut(Option<Cart>) -> Result<(Cart, T), CartsServiceError> + Send,
        T: Send,
    {
        let key = account.to_string();

        for attempt in 1..=MAX_UPDATE_ATTEMPTS {
            let (raw, cart) = self.load(&key).await?;
            let (updated, output) = change(cart)?;
            let encoded = serde_json::to_string(&updated)?;

            let written = self
                .cache
                .compare_and_swap(&self.namespace, &key, raw.as_deref(), &encoded)
                .await?;

            if written {
                return Ok(output);
            }

            debug!(account_id = %account, attempt, "cart changed during update, retrying");
        }

        Err(CartsServiceError::Conflict)
    }
}

#[async_trait]
impl CartsService for CacheCartsService {
    async fn add_course(
        &self,
        account: AccountId,
        course: CourseId,
        price_policy: PricePolicyId,
    ) -> Result<CartLine, CartsServiceError> {
        let record = self.courses.get_course(course).await?;
        let policies = self.courses.list_price_policies(course).await?;

        let line = CartLine::new(&record, &policies, price_policy)
            .ok_or(CartsServiceError::PricePolicyNotFound)?;

        let line = self
            .update(account, |cart| {
                let mut cart = cart.unwrap_or_default();

                cart.insert(line.id, line.clone());

                Ok((cart, line.clone()))
            })
            .await?;

        info!(
            account_id = %account,
            course_id = %course,
            price_policy_id = %price_policy,
            "added course to cart"
        );

        Ok(line)
    }

    async fn get_cart(&self, account: AccountId) -> Result<Option<Cart>, CartsServiceError> {
        let (_, cart) = self.load(&account.to_string()).await?;

        Ok(cart)
    }

    async fn remove_course(
        &self,
        account: AccountId,
        course: CourseId,
    ) -> Result<(), CartsServiceError> {
        self.update(account, |cart| {
            let mut cart = cart.ok_or(CartsServiceError::CartNotFound)?;

            cart.remove(&course).ok_or(CartsServiceError::CourseNotInCart)?;

            Ok((cart, ()))
        })
        .await?;

        info!(account_id = %account, course_id = %course, "removed course from cart");

        Ok(())
    }

    async fn update_price_policy(
        &self,
        account: AccountId,
        course: CourseId,
        price_policy: PricePolicyId,
    ) -> Result<CartLine, CartsServiceError> {
        let line = self
            .update(account, |cart| {
                let mut cart = cart.ok_or(CartsServiceError::CartNotFound)?;

                let line = cart
                    .get_mut(&course)
                    .ok_or(CartsServiceError::CourseNotInCart)?;

                if !line.offers(price_policy) {
                    return Err(CartsServiceError::PricePolicyNotFound);
                }

                line.default_price_policy = price_policy;

                let line = line.clone();

                Ok((cart, line))
            })
            .await?;

        info!(
            account_id = %account,
            course_id = %course,
            price_policy_id = %price_policy,
            "changed cart price policy"
        );

        Ok(line)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Put a course in the user's cart with the given price policy selected,
    /// replacing any line already held for that course.
    async fn add_course(
        &self,
        account: AccountId,
        course: CourseId,
        price_policy: PricePolicyId,
    ) -> Result<CartLine, CartsServiceError>;

    /// The user's cart, or `None` if they never added anything.
    async fn get_cart(&self, account: AccountId) -> Result<Option<Cart>, CartsServiceError>;

    /// Remove a course from the user's cart.
    async fn remove_course(&self, account: AccountId, course: CourseId)
    -> Result<(), CartsServiceError>;

    /// Select a different price policy for a course already in the cart.
    async fn update_price_policy(
        &self,
        account: AccountId,
        course: CourseId,
        price_policy: PricePolicyId,
    ) -> Result<CartLine, CartsServiceError>;
}
