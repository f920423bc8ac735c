//! Payment Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::envelope::SUCCESS;

/// Payment Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentResponse {
    pub code: u16,
}

/// Payment Handler
///
/// Accepts any payload. No payment is taken.
#[endpoint(
    tags("payment"),
    summary = "Pay",
    security(("token_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Payment envelope"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler() -> Json<PaymentResponse> {
    Json(PaymentResponse { code: SUCCESS })
}
