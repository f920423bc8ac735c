//! Course Data

use crate::domain::courses::records::ValidPeriod;

/// New Course Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub course_img: String,
    pub price_policies: Vec<NewPricePolicy>,
}

/// New Price Policy Data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewPricePolicy {
    pub valid_period: ValidPeriod,
    pub price: u64,
}
