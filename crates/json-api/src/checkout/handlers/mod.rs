//! Checkout Handlers

pub(crate) mod create;
pub(crate) mod get;

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use lufei_app::domain::{
        checkout::models::{CheckoutSummary, CouponEntry, CouponKind, CourseCheckout},
        coupons::records::CouponGrantId,
        courses::records::{CourseId, PricePolicyId},
    };

    fn coupon(grant: i64, name: &str) -> CouponEntry {
        CouponEntry {
            id: CouponGrantId::from_i64(grant),
            name: name.to_string(),
            coupon_type: CouponKind {
                code: 0,
                label: "立减".to_string(),
            },
            money_equivalent_value: 1000,
            off_percent: None,
            minimum_consume: 0,
            valid_begin_date: date(2026, 1, 1),
            valid_end_date: date(2026, 12, 31),
        }
    }

    pub(crate) fn make_summary() -> CheckoutSummary {
        CheckoutSummary {
            course: CourseCheckout {
                id: CourseId::from_i64(5),
                title: "Async Rust".to_string(),
                img: "img/course.png".to_string(),
                default_price_policy: PricePolicyId::from_i64(2),
                price: 19900,
                coupons: vec![coupon(11, "Async Rust launch")],
            },
            global_coupons: vec![coupon(12, "Welcome")],
        }
    }
}
