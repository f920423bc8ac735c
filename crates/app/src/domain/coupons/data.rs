//! Coupon Data

use jiff::civil::Date;

use crate::domain::{coupons::records::CouponType, courses::records::CourseId};

/// New Coupon Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCoupon {
    pub name: String,
    pub coupon_type: CouponType,
    pub money_equivalent_value: u64,
    pub off_percent: Option<u8>,
    pub minimum_consume: u64,
    pub valid_begin_date: Date,
    pub valid_end_date: Date,
    /// `None` for a coupon usable on any course.
    pub course_id: Option<CourseId>,
}
