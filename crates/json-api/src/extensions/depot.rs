//! Depot helper extensions.

use std::any::Any;

use lufei_app::domain::accounts::records::AccountId;
use salvo::prelude::{Depot, StatusError};

const ACCOUNT_ID_DEPOT_KEY: &str = "account_id";

/// Typed access to values stashed in the depot by middleware.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_account_id(&mut self, account: AccountId);

    fn account_id_or_401(&self) -> Result<AccountId, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_account_id(&mut self, account: AccountId) {
        self.insert(ACCOUNT_ID_DEPOT_KEY, account);
    }

    fn account_id_or_401(&self) -> Result<AccountId, StatusError> {
        self.get::<AccountId>(ACCOUNT_ID_DEPOT_KEY)
            .copied()
            .map_err(|_missing| StatusError::unauthorized().brief("验证失败"))
    }
}
