//! Coupons service.

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::domain::{
    accounts::records::AccountId,
    coupons::{
        data::NewCoupon,
        errors::CouponsServiceError,
        records::{AvailableCoupon, CouponGrantRecord, CouponId, CouponRecord},
        repository::PgCouponsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCouponsService {
    repository: PgCouponsRepository,
}

impl PgCouponsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgCouponsRepository::new(pool),
        }
    }
}

#[async_trait]
impl CouponsService for PgCouponsService {
    async fn list_available_coupons(
        &self,
        account: AccountId,
        today: Date,
    ) -> Result<Vec<AvailableCoupon>, CouponsServiceError> {
        self.repository
            .list_available_coupons(account, today)
            .await
            .map_err(Into::into)
    }

    async fn create_coupon(&self, coupon: NewCoupon) -> Result<CouponRecord, CouponsServiceError> {
        if coupon.valid_end_date < coupon.valid_begin_date {
            return Err(CouponsServiceError::InvalidData);
        }

        let created = self.repository.create_coupon(coupon).await?;

        info!(coupon_id = %created.id, "created coupon");

        Ok(created)
    }

    async fn grant_coupon(
        &self,
        account: AccountId,
        coupon: CouponId,
    ) -> Result<CouponGrantRecord, CouponsServiceError> {
        let grant = self.repository.create_coupon_grant(account, coupon).await?;

        info!(account_id = %account, coupon_id = %coupon, "granted coupon");

        Ok(grant)
    }
}

#[automock]
#[async_trait]
pub trait CouponsService: Send + Sync {
    /// Unused coupons held by `account` whose validity window contains `today`.
    async fn list_available_coupons(
        &self,
        account: AccountId,
        today: Date,
    ) -> Result<Vec<AvailableCoupon>, CouponsServiceError>;

    /// Create a coupon definition.
    async fn create_coupon(&self, coupon: NewCoupon) -> Result<CouponRecord, CouponsServiceError>;

    /// Hand an unused copy of a coupon to an account.
    async fn grant_coupon(
        &self,
        account: AccountId,
        coupon: CouponId,
    ) -> Result<CouponGrantRecord, CouponsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::{
        domain::{
            accounts::AccountsService,
            coupons::records::{CouponStatus, CouponType},
            courses::records::CourseId,
        },
        test::TestContext,
    };

    use super::*;

    fn new_coupon(name: &str, begin: Date, end: Date) -> NewCoupon {
        NewCoupon {
            name: name.to_string(),
            coupon_type: CouponType::Threshold,
            money_equivalent_value: 20_00,
            off_percent: None,
            minimum_consume: 100_00,
            valid_begin_date: begin,
            valid_end_date: end,
            course_id: None,
        }
    }

    #[tokio::test]
    async fn granted_coupon_is_available_within_window() -> TestResult {
        let ctx = TestContext::new().await;
        let account = ctx.accounts.create_account("alex", "pw").await?;

        let coupon = ctx
            .coupons
            .create_coupon(new_coupon("march", date(2026, 3, 1), date(2026, 3, 31)))
            .await?;

        let grant = ctx.coupons.grant_coupon(account.id, coupon.id).await?;

        assert_eq!(grant.status, CouponStatus::Unused);
        assert!(grant.used_at.is_none());

        let available = ctx
            .coupons
            .list_available_coupons(account.id, date(2026, 3, 15))
            .await?;

        assert_eq!(available.len(), 1);
        assert_eq!(available[0].grant_id, grant.id);
        assert_eq!(available[0].coupon, coupon);

        Ok(())
    }

    #[tokio::test]
    async fn coupons_outside_window_are_not_available() -> TestResult {
        let ctx = TestContext::new().await;
        let account = ctx.accounts.create_account("alex", "pw").await?;

        let coupon = ctx
            .coupons
            .create_coupon(new_coupon("march", date(2026, 3, 1), date(2026, 3, 31)))
            .await?;

        ctx.coupons.grant_coupon(account.id, coupon.id).await?;

        let available = ctx
            .coupons
            .list_available_coupons(account.id, date(2026, 4, 1))
            .await?;

        assert!(available.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn coupons_of_other_accounts_are_not_available() -> TestResult {
        let ctx = TestContext::new().await;
        let alex = ctx.accounts.create_account("alex", "pw").await?;
        let sam = ctx.accounts.create_account("sam", "pw").await?;

        let coupon = ctx
            .coupons
            .create_coupon(new_coupon("march", date(2026, 3, 1), date(2026, 3, 31)))
            .await?;

        ctx.coupons.grant_coupon(sam.id, coupon.id).await?;

        let available = ctx
            .coupons
            .list_available_coupons(alex.id, date(2026, 3, 15))
            .await?;

        assert!(available.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn inverted_validity_window_is_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx
            .coupons
            .create_coupon(new_coupon("broken", date(2026, 3, 31), date(2026, 3, 1)))
            .await;

        assert!(
            matches!(result, Err(CouponsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn coupon_for_unknown_course_is_rejected() {
        let ctx = TestContext::new().await;

        let mut coupon = new_coupon("scoped", date(2026, 3, 1), date(2026, 3, 31));

        coupon.course_id = Some(CourseId::from_i64(404));

        let result = ctx.coupons.create_coupon(coupon).await;

        assert!(
            matches!(result, Err(CouponsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }
}
