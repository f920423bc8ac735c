//! Accounts service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::domain::accounts::{
    data::{Credentials, NewAccount},
    errors::AccountsServiceError,
    records::{AccountRecord, LoginRecord},
    repository::PgAccountsRepository,
    token::{check_auth_token_format, generate_auth_token, hash_password},
};

#[derive(Debug, Clone)]
pub struct PgAccountsService {
    repository: PgAccountsRepository,
}

impl PgAccountsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAccountsRepository::new(pool),
        }
    }
}

#[async_trait]
impl AccountsService for PgAccountsService {
    async fn create_account(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AccountRecord, AccountsServiceError> {
        let account = self
            .repository
            .create_account(NewAccount {
                username: username.to_string(),
                password_hash: hash_password(password),
            })
            .await?;

        info!(account_id = %account.id, "created account");

        Ok(account)
    }

    async fn login(&self, credentials: Credentials) -> Result<LoginRecord, AccountsServiceError> {
        let account = self
            .repository
            .find_account_by_credentials(
                &credentials.username,
                &hash_password(&credentials.password),
            )
            .await?
            .ok_or(AccountsServiceError::InvalidCredentials)?;

        let token = self
            .repository
            .get_or_create_auth_token(account.id, &generate_auth_token())
            .await?;

        Ok(LoginRecord {
            token: token.token,
            username: account.username,
        })
    }

    async fn authenticate_token(&self, token: &str) -> Result<AccountRecord, AccountsServiceError> {
        check_auth_token_format(token).map_err(|_malformed| AccountsServiceError::NotFound)?;

        self.repository
            .find_account_by_token(token)
            .await?
            .ok_or(AccountsServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait AccountsService: Send + Sync {
    /// Create an account with the given username and plain-text password.
    async fn create_account(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AccountRecord, AccountsServiceError>;

    /// Exchange credentials for the account's token, creating it on first login.
    async fn login(&self, credentials: Credentials) -> Result<LoginRecord, AccountsServiceError>;

    /// Resolve a token to the account that owns it.
    async fn authenticate_token(&self, token: &str) -> Result<AccountRecord, AccountsServiceError>;
}
