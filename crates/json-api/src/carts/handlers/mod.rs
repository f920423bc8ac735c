//! Cart Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use lufei_app::domain::{
        carts::models::{CartLine, PricePolicyOption},
        courses::records::{CourseId, PricePolicyId},
    };

    pub(crate) fn make_line(course: i64, selected: i64) -> CartLine {
        CartLine {
            id: CourseId::from_i64(course),
            img: "img/course.png".to_string(),
            title: "Async Rust".to_string(),
            price_policy_list: vec![
                PricePolicyOption {
                    id: PricePolicyId::from_i64(1),
                    valid_period: "1个月".to_string(),
                    price: 9900,
                },
                PricePolicyOption {
                    id: PricePolicyId::from_i64(2),
                    valid_period: "3个月".to_string(),
                    price: 19900,
                },
            ],
            default_price_policy: PricePolicyId::from_i64(selected),
        }
    }
}
