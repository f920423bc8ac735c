//! Login Handler

use std::{collections::BTreeMap, sync::Arc};

use lufei_app::domain::accounts::{AccountsServiceError, data::Credentials};
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{extensions::*, observability::observe_envelope_failure, state::State};

const INVALID_REQUEST: u16 = 1000;
const INVALID_CREDENTIALS: u16 = 1001;
const LOGGED_IN: u16 = 1002;

/// Login Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

/// Field validation messages, or a single message for rejected credentials.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum LoginErrors {
    Fields(BTreeMap<String, Vec<String>>),
    Message(String),
}

/// Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    pub code: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub errors: Option<LoginErrors>,
}

impl LoginResponse {
    fn rejected(code: u16, errors: LoginErrors) -> Self {
        observe_envelope_failure("login", code);

        Self {
            code,
            token: None,
            name: None,
            errors: Some(errors),
        }
    }
}

fn required(
    value: Option<String>,
    field: &str,
    message: &str,
    errors: &mut BTreeMap<String, Vec<String>>,
) -> String {
    let value = value.map(|value| value.trim().to_string()).unwrap_or_default();

    if value.is_empty() {
        errors.insert(field.to_string(), vec![message.to_string()]);
    }

    value
}

/// Login Handler
#[endpoint(
    tags("auth"),
    summary = "Log In",
    responses(
        (status_code = StatusCode::OK, description = "Login envelope"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "auth.login", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let mut errors = BTreeMap::new();
    let username = required(request.username, "username", "用户名不能为空", &mut errors);
    let password = required(request.password, "password", "密码不能为空", &mut errors);

    if !errors.is_empty() {
        return Ok(Json(LoginResponse::rejected(
            INVALID_REQUEST,
            LoginErrors::Fields(errors),
        )));
    }

    let credentials = Credentials { username, password };

    match state.app.accounts.login(credentials).await {
        Ok(login) => {
            info!(username = %login.username, "account logged in");

            Ok(Json(LoginResponse {
                code: LOGGED_IN,
                token: Some(login.token),
                name: Some(login.username),
                errors: None,
            }))
        }
        Err(AccountsServiceError::InvalidCredentials) => Ok(Json(LoginResponse::rejected(
            INVALID_CREDENTIALS,
            LoginErrors::Message("用户名或密码错误".to_string()),
        ))),
        Err(source) => {
            warn!(error = %source, "login failed");

            Ok(Json(LoginResponse::rejected(
                INVALID_CREDENTIALS,
                LoginErrors::Message("用户名或密码错误".to_string()),
            )))
        }
    }
}
