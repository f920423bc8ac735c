//! Accounts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::accounts::token::AuthTokenError;

#[derive(Debug, Error)]
pub enum AccountsServiceError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("account not found")]
    NotFound,

    #[error("account already exists")]
    AlreadyExists,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("token processing error")]
    Token(#[from] AuthTokenError),
}

impl From<Error> for AccountsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            _ => Self::Sql(error),
        }
    }
}
