//! Errors

use tracing::error;

use lufei_app::domain::carts::CartsServiceError;

use crate::envelope::MessageEnvelope;

pub(crate) fn add_failure(error: CartsServiceError) -> MessageEnvelope {
    match error {
        CartsServiceError::CourseNotFound => {
            MessageEnvelope::failure("cart.add", 1001, "课程不存在")
        }
        CartsServiceError::PricePolicyNotFound => {
            MessageEnvelope::failure("cart.add", 1002, "价格策略不存在")
        }
        other => {
            error!(error = ?other, "failed to add course to cart");

            MessageEnvelope::failure("cart.add", 1003, "添加购物车异常")
        }
    }
}

pub(crate) fn remove_failure(error: CartsServiceError) -> MessageEnvelope {
    match error {
        CartsServiceError::CartNotFound => {
            MessageEnvelope::failure("cart.remove", 1001, "购物车中不存在课程")
        }
        CartsServiceError::CourseNotInCart => {
            MessageEnvelope::failure("cart.remove", 1001, "购物车中无此课程")
        }
        other => {
            error!(error = ?other, "failed to remove course from cart");

            MessageEnvelope::failure("cart.remove", 1001, "删除课程异常")
        }
    }
}

pub(crate) fn update_failure(error: CartsServiceError) -> MessageEnvelope {
    match error {
        CartsServiceError::PricePolicyNotFound => {
            MessageEnvelope::failure("cart.update", 1001, "价格策略不存在")
        }
        CartsServiceError::CartNotFound => {
            MessageEnvelope::failure("cart.update", 1002, "购物车清单不存在")
        }
        CartsServiceError::CourseNotInCart => {
            MessageEnvelope::failure("cart.update", 1002, "购物车清单中的商品不存在")
        }
        other => {
            error!(error = ?other, "failed to update cart price policy");

            MessageEnvelope::failure("cart.update", 1002, "更新价格策略异常")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicts_are_reported_generically() {
        let envelope = add_failure(CartsServiceError::Conflict);

        assert_eq!(envelope.code, 1003);
        assert_eq!(envelope.msg.as_deref(), Some("添加购物车异常"));
    }

    #[test]
    fn remove_failures_share_one_code() {
        let codes = [
            remove_failure(CartsServiceError::CartNotFound).code,
            remove_failure(CartsServiceError::CourseNotInCart).code,
            remove_failure(CartsServiceError::Conflict).code,
        ];

        assert_eq!(codes, [1001, 1001, 1001]);
    }

    #[test]
    fn update_distinguishes_missing_policy_from_missing_line() {
        assert_eq!(update_failure(CartsServiceError::PricePolicyNotFound).code, 1001);
        assert_eq!(
            update_failure(CartsServiceError::CourseNotInCart).msg.as_deref(),
            Some("购物车清单中的商品不存在")
        );
    }
}
