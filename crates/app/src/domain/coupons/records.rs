//! Coupon Records

use jiff::{Timestamp, civil::Date};

use crate::{
    domain::{accounts::records::AccountId, courses::records::CourseId},
    ids::TypedId,
};

/// Coupon Id
pub type CouponId = TypedId<CouponRecord>;

/// Coupon Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponRecord {
    pub id: CouponId,
    pub name: String,
    pub coupon_type: CouponType,
    /// Amount taken off, in minor currency units.
    pub money_equivalent_value: u64,
    /// Percentage of the price still payable, for percent-off coupons.
    pub off_percent: Option<u8>,
    /// Minimum spend before the coupon applies, in minor currency units.
    pub minimum_consume: u64,
    pub valid_begin_date: Date,
    pub valid_end_date: Date,
    /// Course the coupon is restricted to; `None` for global coupons.
    pub course_id: Option<CourseId>,
}

impl CouponRecord {
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.course_id.is_none()
    }
}

/// Coupon Grant Id
pub type CouponGrantId = TypedId<CouponGrantRecord>;

/// Coupon Grant Record
///
/// One coupon held by one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponGrantRecord {
    pub id: CouponGrantId,
    pub coupon_id: CouponId,
    pub account_id: AccountId,
    pub status: CouponStatus,
    pub received_at: Timestamp,
    pub used_at: Option<Timestamp>,
}

/// An unused coupon an account can apply at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableCoupon {
    pub grant_id: CouponGrantId,
    pub coupon: CouponRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CouponType {
    /// Fixed amount off.
    General,

    /// Fixed amount off once the minimum spend is reached.
    Threshold,

    /// Percentage of the price.
    PercentOff,
}

impl CouponType {
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::General => 0,
            Self::Threshold => 1,
            Self::PercentOff => 2,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "立减",
            Self::Threshold => "满减",
            Self::PercentOff => "折扣",
        }
    }
}

impl TryFrom<i16> for CouponType {
    type Error = i16;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::General),
            1 => Ok(Self::Threshold),
            2 => Ok(Self::PercentOff),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CouponStatus {
    Unused,
    Used,
    Expired,
}

impl CouponStatus {
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::Unused => 0,
            Self::Used => 1,
            Self::Expired => 2,
        }
    }
}

impl TryFrom<i16> for CouponStatus {
    type Error = i16;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unused),
            1 => Ok(Self::Used),
            2 => Ok(Self::Expired),
            other => Err(other),
        }
    }
}
