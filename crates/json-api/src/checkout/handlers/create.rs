//! Prepare Checkout Handler

use std::sync::Arc;

use jiff::Zoned;
use lufei_app::domain::{
    checkout::{
        CheckoutServiceError,
        models::{CouponEntry, CourseCheckout},
    },
    courses::records::{CourseId, PricePolicyId},
};
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{error, field::Empty, info};

use crate::{
    envelope::SUCCESS, extensions::*, observability::observe_envelope_failure, state::State,
};

/// Prepare Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PrepareCheckoutRequest {
    #[salvo(schema(value_type = i64))]
    pub course_id: CourseId,

    /// Price policy chosen for the course.
    #[salvo(schema(value_type = i64))]
    pub de_price_policy_id: PricePolicyId,
}

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    pub code: u16,

    /// The course entry followed by the coupons usable on any course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[salvo(schema(value_type = Option<Vec<Object>>))]
    pub data: Option<(CourseCheckout, Vec<CouponEntry>)>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl CheckoutResponse {
    fn failure(code: u16, msg: &str) -> Self {
        observe_envelope_failure("checkout.prepare", code);

        Self {
            code,
            data: None,
            msg: Some(msg.to_string()),
        }
    }
}

fn into_failure(error: CheckoutServiceError) -> CheckoutResponse {
    match error {
        CheckoutServiceError::CourseNotFound => CheckoutResponse::failure(1001, "课程不存在"),
        CheckoutServiceError::KeyNotFound => {
            CheckoutResponse::failure(1002, "价格策略不存在")
        }
        CheckoutServiceError::CourseNotInCart => {
            CheckoutResponse::failure(1003, "购物车中无此课程")
        }
        other => {
            error!(error = ?other, "failed to prepare checkout");

            CheckoutResponse::failure(1004, "结算异常")
        }
    }
}

/// Prepare Checkout Handler
#[endpoint(
    tags("accounts"),
    summary = "Prepare Checkout",
    security(("token_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Checkout envelope"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "checkout.prepare",
    skip(json, depot),
    fields(account_id = Empty, course_id = Empty, coupons_count = Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<PrepareCheckoutRequest>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_id_or_401()?;
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("account_id", tracing::field::display(account));
    span.record("course_id", tracing::field::display(request.course_id));

    let today = Zoned::now().date();

    let response = match state
        .app
        .checkout
        .prepare(account, request.course_id, request.de_price_policy_id, today)
        .await
    {
        Ok(summary) => {
            let coupons_count = summary.course.coupons.len() + summary.global_coupons.len();

            span.record("coupons_count", coupons_count);

            info!("checkout prepared");

            CheckoutResponse {
                code: SUCCESS,
                data: Some((summary.course, summary.global_coupons)),
                msg: None,
            }
        }
        Err(error) => into_failure(error),
    };

    Ok(Json(response))
}
