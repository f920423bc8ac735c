//! Checkout Models

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::domain::{
    coupons::records::{AvailableCoupon, CouponGrantId, CouponType},
    courses::records::{CourseId, PricePolicyId},
};

/// What a user is about to pay for and the coupons they could apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub course: CourseCheckout,
    pub global_coupons: Vec<CouponEntry>,
}

/// The course being checked out, at the chosen price policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCheckout {
    pub id: CourseId,
    pub title: String,
    pub img: String,
    pub default_price_policy: PricePolicyId,
    pub price: u64,
    /// Coupons restricted to this course.
    pub coupons: Vec<CouponEntry>,
}

/// A held coupon as offered at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponEntry {
    /// Id of the user's coupon record, used to redeem it.
    pub id: CouponGrantId,
    pub name: String,
    pub coupon_type: CouponKind,
    pub money_equivalent_value: u64,
    pub off_percent: Option<u8>,
    pub minimum_consume: u64,
    pub valid_begin_date: Date,
    pub valid_end_date: Date,
}

/// Coupon type code plus its label, e.g. `{"code": 1, "label": "满减"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponKind {
    pub code: i16,
    pub label: String,
}

impl From<CouponType> for CouponKind {
    fn from(coupon_type: CouponType) -> Self {
        Self {
            code: coupon_type.as_i16(),
            label: coupon_type.label().to_string(),
        }
    }
}

impl From<&AvailableCoupon> for CouponEntry {
    fn from(available: &AvailableCoupon) -> Self {
        let coupon = &available.coupon;

        Self {
            id: available.grant_id,
            name: coupon.name.clone(),
            coupon_type: coupon.coupon_type.into(),
            money_equivalent_value: coupon.money_equivalent_value,
            off_percent: coupon.off_percent,
            minimum_consume: coupon.minimum_consume,
            valid_begin_date: coupon.valid_begin_date,
            valid_end_date: coupon.valid_end_date,
        }
    }
}
