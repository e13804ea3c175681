use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::{AdminSessionView, LoginRequest};
use crate::auth::application::ports::incoming::use_cases::{LoginError, LoginUseCase};
use crate::auth::application::ports::outgoing::{AdminAccounts, PasswordHasher, TokenProvider};
use crate::shared::deadline::with_deadline;

pub struct LoginService<A, H, T>
where
    A: AdminAccounts,
    H: PasswordHasher,
    T: TokenProvider,
{
    accounts: A,
    hasher: H,
    tokens: T,
    timeout: Duration,
}

impl<A, H, T> LoginService<A, H, T>
where
    A: AdminAccounts,
    H: PasswordHasher,
    T: TokenProvider,
{
    pub fn new(accounts: A, hasher: H, tokens: T, timeout: Duration) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
            timeout,
        }
    }
}

#[async_trait]
impl<A, H, T> LoginUseCase for LoginService<A, H, T>
where
    A: AdminAccounts + Send + Sync,
    H: PasswordHasher + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<AdminSessionView, LoginError> {
        if !self.accounts.is_configured() {
            return Err(LoginError::NotConfigured);
        }

        let account = with_deadline(self.timeout, self.accounts.find_by_email(request.email()))
            .await?
            .ok_or_else(|| {
                warn!("Sign-in refused: unknown email");
                LoginError::InvalidCredentials
            })?;

        if !self
            .hasher
            .verify_password(request.password(), &account.password_hash)
            .await?
        {
            warn!("Sign-in refused: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let admin = account.identity();
        let issued = self
            .tokens
            .generate_access_token(&admin)
            .map_err(|e| LoginError::TokenGeneration(e.to_string()))?;

        info!(admin_id = %admin.id, "Admin signed in");
        Ok(AdminSessionView {
            access_token: issued.token,
            expires_at: issued.expires_at,
            admin,
        })
    }
}
