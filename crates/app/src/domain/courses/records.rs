//! Course Records

use std::fmt::{self, Display, Formatter};

use crate::ids::TypedId;

/// Course Id
pub type CourseId = TypedId<CourseRecord>;

/// Course Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub id: CourseId,
    pub name: String,
    pub course_img: String,
}

/// Price Policy Id
pub type PricePolicyId = TypedId<PricePolicyRecord>;

/// Price Policy Record
///
/// A priced access period for a course. `price` is in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePolicyRecord {
    pub id: PricePolicyId,
    pub course_id: CourseId,
    pub valid_period: ValidPeriod,
    pub price: u64,
}

/// Length of access granted by a price policy, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidPeriod(u32);

impl ValidPeriod {
    /// Access with no expiry.
    pub const UNLIMITED: Self = Self(999);

    #[must_use]
    pub const fn from_days(days: u32) -> Self {
        Self(days)
    }

    #[must_use]
    pub const fn days(self) -> u32 {
        self.0
    }

    /// Human-readable label shown to shoppers.
    #[must_use]
    pub fn label(self) -> String {
        let label = match self.0 {
            1 => "1天",
            3 => "3天",
            7 => "1周",
            14 => "2周",
            30 => "1个月",
            60 => "2个月",
            90 => "3个月",
            120 => "4个月",
            180 => "6个月",
            210 => "12个月",
            540 => "18个月",
            720 => "24个月",
            999 => "长期有效",
            days => return format!("{days}天"),
        };

        label.to_string()
    }
}

impl Display for ValidPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
