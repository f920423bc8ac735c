//! Account Records

use jiff::Timestamp;

use crate::ids::TypedId;

/// Account Id
pub type AccountId = TypedId<AccountRecord>;

/// Account Record
#[derive(Debug, Clone, PartialEq)]
pub struct AccountRecord {
    pub id: AccountId,
    pub username: String,
    pub created_at: Timestamp,
}

/// Auth Token Record
///
/// One per account; created on first login and never rotated.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthTokenRecord {
    pub account_id: AccountId,
    pub token: String,
    pub created_at: Timestamp,
}

/// Successful login result.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginRecord {
    pub token: String,
    pub username: String,
}
