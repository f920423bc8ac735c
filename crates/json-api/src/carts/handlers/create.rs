//! Add Course Handler

use std::sync::Arc;

use lufei_app::domain::courses::records::{CourseId, PricePolicyId};
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{carts::errors::add_failure, envelope::MessageEnvelope, extensions::*, state::State};

/// Add Course Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCourseRequest {
    #[salvo(schema(value_type = i64))]
    pub course_id: CourseId,

    #[salvo(schema(value_type = i64))]
    pub price_policy_id: PricePolicyId,
}

/// Add Course Handler
#[endpoint(
    tags("shopping_car"),
    summary = "Add Course To Cart",
    security(("token_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart envelope"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "cart.add", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<AddCourseRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_id_or_401()?;
    let request = json.into_inner();

    let envelope = match state
        .app
        .carts
        .add_course(account, request.course_id, request.price_policy_id)
        .await
    {
        Ok(line) => {
            info!(
                %account,
                course = %line.id,
                price_policy = %line.default_price_policy,
                "course added to cart"
            );

            MessageEnvelope::success(None)
        }
        Err(error) => add_failure(error),
    };

    Ok(Json(envelope))
}

#[cfg(test)]
mod tests {
    use lufei_app::domain::carts::{CartsServiceError, MockCartsService};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{TEST_ACCOUNT_ID, carts_service};

    use super::super::tests::make_line;
    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("shopping_car").post(handler))
    }

    #[tokio::test]
    async fn test_add_course_success() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_course()
            .once()
            .withf(|account, course, policy| {
                *account == TEST_ACCOUNT_ID
                    && *course == CourseId::from_i64(5)
                    && *policy == PricePolicyId::from_i64(2)
            })
            .return_once(|_, _, _| Ok(make_line(5, 2)));

        let mut res = TestClient::post("http://example.com/shopping_car")
            .json(&json!({ "course_id": 5, "price_policy_id": "2" }))
            .send(&make_service(carts))
            .await;

        let body: MessageEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, MessageEnvelope { code: 1000, msg: None });

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unknown_course_returns_1001() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_course()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::CourseNotFound));

        let mut res = TestClient::post("http://example.com/shopping_car")
            .json(&json!({ "course_id": 404, "price_policy_id": 1 }))
            .send(&make_service(carts))
            .await;

        let body: MessageEnvelope = res.take_json().await?;

        assert_eq!(body.code, 1001);
        assert_eq!(body.msg.as_deref(), Some("课程不存在"));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_foreign_price_policy_returns_1002() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_course()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::PricePolicyNotFound));

        let mut res = TestClient::post("http://example.com/shopping_car")
            .json(&json!({ "course_id": 5, "price_policy_id": 9 }))
            .send(&make_service(carts))
            .await;

        let body: MessageEnvelope = res.take_json().await?;

        assert_eq!(body.code, 1002);
        assert_eq!(body.msg.as_deref(), Some("价格策略不存在"));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_with_malformed_body_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_course().never();

        let res = TestClient::post("http://example.com/shopping_car")
            .json(&json!({ "course_id": "five" }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
