//! Get Checkout Summary Handler

use std::sync::Arc;

use lufei_app::domain::checkout::CheckoutServiceError;
use salvo::prelude::*;
use tracing::error;

use crate::{extensions::*, state::State};

/// Get Checkout Summary Handler
#[endpoint(
    tags("accounts"),
    summary = "Get Checkout Summary",
    security(("token_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Stored checkout summary"),
        (status_code = StatusCode::NOT_FOUND, description = "No checkout prepared"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "checkout.get", skip(depot, res), err)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_id_or_401()?;

    let summary = match state.app.checkout.get_summary(account).await {
        Ok(summary) => summary,
        Err(CheckoutServiceError::SummaryNotFound) => {
            return Err(StatusError::not_found().brief("No checkout summary"));
        }
        Err(source) => {
            error!(error = ?source, "failed to load checkout summary");

            return Err(StatusError::internal_server_error());
        }
    };

    res.render(Json(summary));

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use lufei_app::{cache::CacheError, domain::checkout::MockCheckoutService};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use crate::test_helpers::{TEST_ACCOUNT_ID, checkout_service};

    use super::super::tests::make_summary;
    use super::*;

    fn make_service(checkout: MockCheckoutService) -> Service {
        checkout_service(checkout, Router::with_path("accounts").get(handler))
    }

    #[tokio::test]
    async fn test_get_summary_renders_stored_summary() -> TestResult {
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_get_summary()
            .once()
            .withf(|account| *account == TEST_ACCOUNT_ID)
            .return_once(|_| Ok(make_summary()));

        let mut res = TestClient::get("http://example.com/accounts")
            .send(&make_service(checkout))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, serde_json::to_value(make_summary())?);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_summary_returns_404() -> TestResult {
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_get_summary()
            .once()
            .return_once(|_| Err(CheckoutServiceError::SummaryNotFound));

        let res = TestClient::get("http://example.com/accounts")
            .send(&make_service(checkout))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_summary_cache_failure_returns_500() -> TestResult {
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_get_summary()
            .once()
            .return_once(|_| Err(CheckoutServiceError::Cache(CacheError::UnexpectedReply(-1))));

        let res = TestClient::get("http://example.com/accounts")
            .send(&make_service(checkout))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
