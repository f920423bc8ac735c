//! Update Price Policy Handler

use std::sync::Arc;

use lufei_app::domain::courses::records::{CourseId, PricePolicyId};
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{carts::errors::update_failure, envelope::MessageEnvelope, extensions::*, state::State};

/// Update Price Policy Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdatePricePolicyRequest {
    #[salvo(schema(value_type = i64))]
    pub course_id: CourseId,

    #[salvo(schema(value_type = i64))]
    pub price_policy_id: PricePolicyId,
}

/// Update Price Policy Handler
#[endpoint(
    tags("shopping_car"),
    summary = "Change Selected Price Policy",
    security(("token_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart envelope"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "cart.update", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<UpdatePricePolicyRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_id_or_401()?;
    let request = json.into_inner();

    let envelope = match state
        .app
        .carts
        .update_price_policy(account, request.course_id, request.price_policy_id)
        .await
    {
        Ok(line) => {
            info!(
                %account,
                course = %line.id,
                price_policy = %line.default_price_policy,
                "cart price policy changed"
            );

            MessageEnvelope::success(Some("价格策略修改成功"))
        }
        Err(error) => update_failure(error),
    };

    Ok(Json(envelope))
}
