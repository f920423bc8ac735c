//! Lufei Domain Concerns

pub mod accounts;
pub mod carts;
pub mod checkout;
pub mod coupons;
pub mod courses;
