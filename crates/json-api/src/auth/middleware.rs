//! Auth middleware.

use std::sync::Arc;

use lufei_app::domain::accounts::AccountsServiceError;
use salvo::prelude::*;
use tracing::error;

use crate::{extensions::*, state::State};

/// Query parameter carrying the opaque auth token.
pub(crate) const TOKEN_QUERY_PARAM: &str = "token";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = req
        .query::<String>(TOKEN_QUERY_PARAM)
        .filter(|token| !token.is_empty())
    else {
        res.render(StatusError::unauthorized().brief("验证失败"));

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(status) => {
            res.render(status);

            return;
        }
    };

    let account = match state.app.accounts.authenticate_token(&token).await {
        Ok(account) => account,
        Err(AccountsServiceError::NotFound) => {
            res.render(StatusError::unauthorized().brief("Invalid token."));

            return;
        }
        Err(source) => {
            error!("failed to validate auth token: {source}");

            res.render(StatusError::internal_server_error());

            return;
        }
    };

    depot.insert_account_id(account.id);

    ctrl.call_next(req, depot, res).await;
}
