//! Checkout service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;
use tracing::info;

use crate::{
    cache::CacheStore,
    domain::{
        accounts::records::AccountId,
        carts::CartsService,
        checkout::{
            errors::CheckoutServiceError,
            models::{CheckoutSummary, CouponEntry, CourseCheckout},
        },
        coupons::CouponsService,
        courses::{
            CoursesService,
            records::{CourseId, PricePolicyId},
        },
    },
};

/// Checkout service storing each user's latest summary in a cache hash.
#[derive(Clone)]
pub struct CacheCheckoutService {
    cache: Arc<dyn CacheStore>,
    courses: Arc<dyn CoursesService>,
    carts: Arc<dyn CartsService>,
    coupons: Arc<dyn CouponsService>,
    namespace: String,
}

impl CacheCheckoutService {
    #[must_use]
    pub fn new(
        cache: Arc<dyn CacheStore>,
        courses: Arc<dyn CoursesService>,
        carts: Arc<dyn CartsService>,
        coupons: Arc<dyn CouponsService>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            cache,
            courses,
            carts,
            coupons,
            namespace: namespace.into(),
        }
    }
}

#[async_trait]
impl CheckoutService for CacheCheckoutService {
    async fn prepare(
        &self,
        account: AccountId,
        course: CourseId,
        price_policy: PricePolicyId,
        today: Date,
    ) -> Result<CheckoutSummary, CheckoutServiceError> {
        self.courses.get_course(course).await?;

        let line = self
            .carts
            .get_cart(account)
            .await?
            .and_then(|mut cart| cart.remove(&course))
            .ok_or(CheckoutServiceError::CourseNotInCart)?;

        let price = line
            .price_policy(price_policy)
            .map(|option| option.price)
            .ok_or(CheckoutServiceError::KeyNotFound)?;

        let mut course_coupons = Vec::new();
        let mut global_coupons = Vec::new();

        for available in self.coupons.list_available_coupons(account, today).await? {
            if available.coupon.is_global() {
                global_coupons.push(CouponEntry::from(&available));
            } else if available.coupon.course_id == Some(course) {
                course_coupons.push(CouponEntry::from(&available));
            }
        }

        let summary = CheckoutSummary {
            course: CourseCheckout {
                id: line.id,
                title: line.title,
                img: line.img,
                default_price_policy: price_policy,
                price,
                coupons: course_coupons,
            },
            global_coupons,
        };

        self.cache
            .set(
                &self.namespace,
                &account.to_string(),
                &serde_json::to_string(&summary)?,
            )
            .await?;

        info!(
            account_id = %account,
            course_id = %course,
            price_policy_id = %price_policy,
            coupons = summary.course.coupons.len() + summary.global_coupons.len(),
            "prepared checkout"
        );

        Ok(summary)
    }

    async fn get_summary(
        &self,
        account: AccountId,
    ) -> Result<CheckoutSummary, CheckoutServiceError> {
        let raw = self
            .cache
            .get(&self.namespace, &account.to_string())
            .await?
            .ok_or(CheckoutServiceError::SummaryNotFound)?;

        Ok(serde_json::from_str(&raw)?)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Build the checkout summary for one course in the user's cart and store
    /// it, replacing any earlier summary.
    async fn prepare(
        &self,
        account: AccountId,
        course: CourseId,
        price_policy: PricePolicyId,
        today: Date,
    ) -> Result<CheckoutSummary, CheckoutServiceError>;

    /// The most recently prepared summary.
    async fn get_summary(&self, account: AccountId)
    -> Result<CheckoutSummary, CheckoutServiceError>;
}
