//! Get Cart Handler

use std::sync::Arc;

use lufei_app::domain::carts::models::Cart;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    envelope::SUCCESS, extensions::*, observability::observe_envelope_failure, state::State,
};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    pub code: u16,

    /// Cart lines keyed by course id; `null` when there is no cart or it
    /// could not be read.
    #[serde(default)]
    #[salvo(schema(value_type = Option<Object>))]
    pub data: Option<Cart>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

/// Get Cart Handler
#[endpoint(
    tags("shopping_car"),
    summary = "Get Cart",
    security(("token_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart envelope"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "cart.get", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_id_or_401()?;

    let response = match state.app.carts.get_cart(account).await {
        Ok(cart) => CartResponse {
            code: SUCCESS,
            data: cart,
            msg: None,
        },
        Err(source) => {
            error!(error = ?source, "failed to load cart");
            observe_envelope_failure("cart.get", 1001);

            CartResponse {
                code: 1001,
                data: None,
                msg: Some("获取购物车列表失败".to_string()),
            }
        }
    };

    Ok(Json(response))
}
