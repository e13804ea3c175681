use async_trait::async_trait;

use crate::auth::application::domain::AdminAccount;
use crate::auth::application::ports::outgoing::{
    AdminAccounts, AdminAccountsError, RevocationError, SessionRevocation,
};
use crate::shared::backend::UnconfiguredBackend;

#[async_trait]
impl AdminAccounts for UnconfiguredBackend {
    fn is_configured(&self) -> bool {
        false
    }

    async fn find_by_email(
        &self,
        _email: &str,
    ) -> Result<Option<AdminAccount>, AdminAccountsError> {
        Err(AdminAccountsError::NotConfigured)
    }

    async fn create(
        &self,
        _email: &str,
        _password_hash: &str,
    ) -> Result<AdminAccount, AdminAccountsError> {
        Err(AdminAccountsError::NotConfigured)
    }
}

/// Nothing can be signed in without a backend, so nothing is revoked.
#[async_trait]
impl SessionRevocation for UnconfiguredBackend {
    async fn revoke(&self, _token_hash: &str, _ttl_secs: u64) -> Result<(), RevocationError> {
        Err(RevocationError::NotConfigured)
    }

    async fn is_revoked(&self, _token_hash: &str) -> Result<bool, RevocationError> {
        Ok(false)
    }
}
