use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{RevocationError, SessionRevocation};

/// Revoked-token list in Redis.
///
/// ```text
/// auth:revoked:token:{token_hash} -> "1"   (TTL = remaining token lifetime)
/// ```
///
/// A key that exists means the token was signed out. Redis expiry removes it
/// once the token could no longer verify anyway.
#[derive(Clone)]
pub struct RedisSessionRevocation {
    pool: Arc<Pool>,
}

impl RedisSessionRevocation {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:revoked:token:{token_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, RevocationError> {
        self.pool
            .get()
            .await
            .map_err(|e| RevocationError::Unavailable(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl SessionRevocation for RedisSessionRevocation {
    async fn revoke(&self, token_hash: &str, ttl_secs: u64) -> Result<(), RevocationError> {
        let mut conn = self.get_conn().await?;

        let _: () = conn
            .set_ex(Self::token_key(token_hash), "1", ttl_secs.max(1))
            .await
            .map_err(|e| RevocationError::Unavailable(e.to_string()))?;

        tracing::debug!(ttl_secs, "Token revoked");
        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, RevocationError> {
        let mut conn = self.get_conn().await?;

        conn.exists(Self::token_key(token_hash))
            .await
            .map_err(|e| RevocationError::Unavailable(e.to_string()))
    }
}
