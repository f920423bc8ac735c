//! Cart Models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::courses::records::{CourseId, CourseRecord, PricePolicyId, PricePolicyRecord};

/// A user's cart, keyed by course id.
///
/// Encoded as a JSON object whose keys are the course ids as decimal strings.
pub type Cart = BTreeMap<CourseId, CartLine>;

/// One course in a cart together with the price policy the user picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: CourseId,
    pub img: String,
    pub title: String,
    pub price_policy_list: Vec<PricePolicyOption>,
    pub default_price_policy: PricePolicyId,
}

impl CartLine {
    /// Build a line for `course` offering every policy in `policies`, with
    /// `selected` as the chosen one.
    ///
    /// Returns `None` when `selected` is not one of `policies`.
    #[must_use]
    pub fn new(
        course: &CourseRecord,
        policies: &[PricePolicyRecord],
        selected: PricePolicyId,
    ) -> Option<Self> {
        if !policies.iter().any(|policy| policy.id == selected) {
            return None;
        }

        Some(Self {
            id: course.id,
            img: course.course_img.clone(),
            title: course.name.clone(),
            price_policy_list: policies.iter().map(PricePolicyOption::from).collect(),
            default_price_policy: selected,
        })
    }

    #[must_use]
    pub fn offers(&self, price_policy: PricePolicyId) -> bool {
        self.price_policy(price_policy).is_some()
    }

    #[must_use]
    pub fn price_policy(&self, price_policy: PricePolicyId) -> Option<&PricePolicyOption> {
        self.price_policy_list
            .iter()
            .find(|option| option.id == price_policy)
    }
}

/// A price policy as shown in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePolicyOption {
    pub id: PricePolicyId,
    /// Display label of the access period, e.g. `1个月`.
    pub valid_period: String,
    pub price: u64,
}

impl From<&PricePolicyRecord> for PricePolicyOption {
    fn from(policy: &PricePolicyRecord) -> Self {
        Self {
            id: policy.id,
            valid_period: policy.valid_period.label(),
            price: policy.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::courses::records::ValidPeriod;

    use super::*;

    fn course() -> CourseRecord {
        CourseRecord {
            id: CourseId::from_i64(5),
            name: "Async Rust".to_string(),
            course_img: "img/async.png".to_string(),
        }
    }

    fn policies() -> Vec<PricePolicyRecord> {
        [(1, 30, 99_00), (2, 90, 199_00)]
            .into_iter()
            .map(|(id, days, price)| PricePolicyRecord {
                id: PricePolicyId::from_i64(id),
                course_id: CourseId::from_i64(5),
                valid_period: ValidPeriod::from_days(days),
                price,
            })
            .collect()
    }

    #[test]
    fn new_line_lists_every_policy_with_labels() -> TestResult {
        let line = CartLine::new(&course(), &policies(), PricePolicyId::from_i64(2))
            .ok_or("policy 2 should be accepted")?;

        assert_eq!(line.title, "Async Rust");
        assert_eq!(line.default_price_policy, PricePolicyId::from_i64(2));
        assert_eq!(
            line.price_policy_list
                .iter()
                .map(|option| option.valid_period.as_str())
                .collect::<Vec<_>>(),
            vec!["1个月", "3个月"]
        );
        assert_eq!(line.price_policy(line.default_price_policy).map(|p| p.price), Some(199_00));

        Ok(())
    }

    #[test]
    fn new_line_rejects_foreign_policy() {
        assert!(CartLine::new(&course(), &policies(), PricePolicyId::from_i64(9)).is_none());
    }

    #[test]
    fn cart_encodes_course_ids_as_object_keys() -> TestResult {
        let line = CartLine::new(&course(), &policies(), PricePolicyId::from_i64(1))
            .ok_or("policy 1 should be accepted")?;

        let cart = Cart::from([(line.id, line)]);
        let json: serde_json::Value = serde_json::to_value(&cart)?;

        assert_eq!(json["5"]["id"], 5);
        assert_eq!(json["5"]["default_price_policy"], 1);
        assert_eq!(json["5"]["price_policy_list"][0]["valid_period"], "1个月");

        Ok(())
    }

    #[test]
    fn cart_accepts_string_encoded_ids() -> TestResult {
        let json = r#"{"5":{"id":"5","img":"i","title":"t","price_policy_list":[{"id":"1","valid_period":"1个月","price":100}],"default_price_policy":"1"}}"#;

        let cart: Cart = serde_json::from_str(json)?;
        let line = cart.get(&CourseId::from_i64(5)).ok_or("course 5 missing")?;

        assert!(line.offers(PricePolicyId::from_i64(1)));

        Ok(())
    }
}
