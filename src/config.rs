use std::{env, time::Duration};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Upper bounds for a single round-trip to the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreTimeouts {
    pub read: Duration,
    pub write: Duration,
}

impl Default for StoreTimeouts {
    fn default() -> Self {
        Self {
            read: Duration::from_millis(5_000),
            write: Duration::from_millis(10_000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub redis_url: Option<String>,
    pub timeouts: StoreTimeouts,
    pub notice_ttl: Duration,
    pub admin_bootstrap: Option<AdminBootstrap>,
}

/// Loads `.env.{RUST_ENV}` and falls back to `.env`.
pub fn load_dotenv() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = value("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or("PORT", value("PORT"), 8080u16)?;

        let database_url = value("DATABASE_URL");
        let redis_url = value("REDIS_URL");
        if database_url.is_some() && redis_url.is_none() {
            return Err(ConfigError::Missing("REDIS_URL"));
        }

        let defaults = StoreTimeouts::default();
        let timeouts = StoreTimeouts {
            read: Duration::from_millis(parse_or(
                "READ_TIMEOUT_MS",
                value("READ_TIMEOUT_MS"),
                defaults.read.as_millis() as u64,
            )?),
            write: Duration::from_millis(parse_or(
                "WRITE_TIMEOUT_MS",
                value("WRITE_TIMEOUT_MS"),
                defaults.write.as_millis() as u64,
            )?),
        };
        if timeouts.read.is_zero() {
            return Err(ConfigError::Invalid {
                key: "READ_TIMEOUT_MS",
                value: "0".to_string(),
            });
        }
        if timeouts.write.is_zero() {
            return Err(ConfigError::Invalid {
                key: "WRITE_TIMEOUT_MS",
                value: "0".to_string(),
            });
        }

        let notice_ttl = Duration::from_secs(parse_or(
            "NOTICE_TTL_SECS",
            value("NOTICE_TTL_SECS"),
            3u64,
        )?);

        let admin_bootstrap = match (value("ADMIN_EMAIL"), value("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap { email, password }),
            _ => None,
        };

        Ok(Self {
            host,
            port,
            database_url,
            redis_url,
            timeouts,
            notice_ttl,
            admin_bootstrap,
        })
    }

    /// The backend counts as configured only when a database URL is present.
    pub fn backend_configured(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
