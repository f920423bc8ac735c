//! Remove Course Handler

use std::sync::Arc;

use lufei_app::domain::courses::records::CourseId;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{carts::errors::remove_failure, envelope::MessageEnvelope, extensions::*, state::State};

/// Remove Course Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RemoveCourseRequest {
    #[salvo(schema(value_type = i64))]
    pub course_id: CourseId,
}

/// Remove Course Handler
#[endpoint(
    tags("shopping_car"),
    summary = "Remove Course From Cart",
    security(("token_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart envelope"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "cart.remove", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<RemoveCourseRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_id_or_401()?;
    let course = json.into_inner().course_id;

    let envelope = match state.app.carts.remove_course(account, course).await {
        Ok(()) => {
            info!(%account, %course, "course removed from cart");

            MessageEnvelope::success(Some("删除课程成功"))
        }
        Err(error) => remove_failure(error),
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

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("shopping_car").delete(handler))
    }

    #[tokio::test]
    async fn test_remove_course_success() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_course()
            .once()
            .withf(|account, course| {
                *account == TEST_ACCOUNT_ID && *course == CourseId::from_i64(5)
            })
            .return_once(|_, _| Ok(()));

        let mut res = TestClient::delete("http://example.com/shopping_car")
            .json(&json!({ "course_id": 5 }))
            .send(&make_service(carts))
            .await;

        let body: MessageEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.code, 1000);
        assert_eq!(body.msg.as_deref(), Some("删除课程成功"));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_absent_course_returns_1001() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_course()
            .once()
            .return_once(|_, _| Err(CartsServiceError::CourseNotInCart));

        let mut res = TestClient::delete("http://example.com/shopping_car")
            .json(&json!({ "course_id": 6 }))
            .send(&make_service(carts))
            .await;

        let body: MessageEnvelope = res.take_json().await?;

        assert_eq!(body.code, 1001);
        assert_eq!(body.msg.as_deref(), Some("购物车中无此课程"));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_without_cart_returns_1001() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_course()
            .once()
            .return_once(|_, _| Err(CartsServiceError::CartNotFound));

        let mut res = TestClient::delete("http://example.com/shopping_car")
            .json(&json!({ "course_id": 6 }))
            .send(&make_service(carts))
            .await;

        let body: MessageEnvelope = res.take_json().await?;

        assert_eq!(body.code, 1001);
        assert_eq!(body.msg.as_deref(), Some("购物车中不存在课程"));

        Ok(())
    }
}
