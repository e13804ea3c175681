use async_trait::async_trait;
use tracing::{debug, warn};

use super::token_hasher::hash_token;
use crate::auth::application::domain::AdminSession;
use crate::auth::application::ports::incoming::use_cases::{GetSessionUseCase, SessionError};
use crate::auth::application::ports::outgoing::{SessionRevocation, TokenProvider};

pub struct GetSessionService<T, R>
where
    T: TokenProvider,
    R: SessionRevocation,
{
    tokens: T,
    revocation: R,
}

impl<T, R> GetSessionService<T, R>
where
    T: TokenProvider,
    R: SessionRevocation,
{
    pub fn new(tokens: T, revocation: R) -> Self {
        Self { tokens, revocation }
    }
}

#[async_trait]
impl<T, R> GetSessionUseCase for GetSessionService<T, R>
where
    T: TokenProvider + Send + Sync,
    R: SessionRevocation + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<AdminSession, SessionError> {
        let claims = self.tokens.verify_token(token).map_err(|e| {
            debug!(error = %e, "Bearer token rejected");
            SessionError::InvalidToken
        })?;

        if self.revocation.is_revoked(&hash_token(token)).await? {
            warn!(admin_id = %claims.sub, "Signed-out token presented");
            return Err(SessionError::Revoked);
        }

        Ok(AdminSession {
            admin: claims.identity(),
            expires_at: claims.expires_at(),
            token: token.to_string(),
        })
    }
}
