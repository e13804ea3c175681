use std::env;

use rand_core::{OsRng, RngCore};

use crate::config::ConfigError;

const MIN_SECRET_LEN: usize = 32;
const MAX_ACCESS_EXPIRY: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("JWT_SECRET")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        // HS256 wants at least 32 bytes of key.
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                value: format!("shorter than {MIN_SECRET_LEN} characters"),
            });
        }

        let access_token_expiry = match lookup("JWT_ACCESS_EXPIRY") {
            None => 3600,
            Some(raw) => raw.trim().parse::<i64>().map_err(|_| ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                value: raw.clone(),
            })?,
        };
        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                value: access_token_expiry.to_string(),
            });
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "portfolio".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }

    /// Random per-process secret for runs without a backend, where nobody can
    /// sign in anyway.
    pub fn ephemeral() -> Self {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        let secret_key = bytes.iter().map(|b| format!("{b:02x}")).collect();

        Self {
            secret_key,
            issuer: "portfolio".to_string(),
            access_token_expiry: 3600,
        }
    }
}
