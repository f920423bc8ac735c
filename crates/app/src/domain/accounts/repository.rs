//! Accounts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::accounts::{
    data::NewAccount,
    records::{AccountId, AccountRecord, AuthTokenRecord},
};

const CREATE_ACCOUNT_SQL: &str = include_str!("sql/create_account.sql");
const FIND_ACCOUNT_BY_CREDENTIALS_SQL: &str = include_str!("sql/find_account_by_credentials.sql");
const FIND_ACCOUNT_BY_TOKEN_SQL: &str = include_str!("sql/find_account_by_token.sql");
const CREATE_AUTH_TOKEN_SQL: &str = include_str!("sql/create_auth_token.sql");
const GET_AUTH_TOKEN_SQL: &str = include_str!("sql/get_auth_token.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgAccountsRepository {
    pool: PgPool,
}

impl PgAccountsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_account(
        &self,
        account: NewAccount,
    ) -> Result<AccountRecord, sqlx::Error> {
        query_as::<Postgres, AccountRecord>(CREATE_ACCOUNT_SQL)
            .bind(account.username)
            .bind(account.password_hash)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn find_account_by_credentials(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<AccountRecord>, sqlx::Error> {
        query_as::<Postgres, AccountRecord>(FIND_ACCOUNT_BY_CREDENTIALS_SQL)
            .bind(username)
            .bind(password_hash)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn find_account_by_token(
        &self,
        token: &str,
    ) -> Result<Option<AccountRecord>, sqlx::Error> {
        query_as::<Postgres, AccountRecord>(FIND_ACCOUNT_BY_TOKEN_SQL)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
    }

    /// Return the account's token, inserting `candidate` when none exists yet.
    pub(crate) async fn get_or_create_auth_token(
        &self,
        account: AccountId,
        candidate: &str,
    ) -> Result<AuthTokenRecord, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let created = query_as::<Postgres, AuthTokenRecord>(CREATE_AUTH_TOKEN_SQL)
            .bind(account.into_i64())
            .bind(candidate)
            .fetch_optional(&mut *tx)
            .await?;

        let token = match created {
            Some(token) => token,
            None => {
                query_as::<Postgres, AuthTokenRecord>(GET_AUTH_TOKEN_SQL)
                    .bind(account.into_i64())
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;

        Ok(token)
    }
}

impl<'r> FromRow<'r, PgRow> for AccountRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: AccountId::from_i64(row.try_get("id")?),
            username: row.try_get("username")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for AuthTokenRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            account_id: AccountId::from_i64(row.try_get("account_id")?),
            token: row.try_get("token")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
