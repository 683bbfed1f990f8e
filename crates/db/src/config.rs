use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

/// Database connection settings loaded from environment variables.
///
/// `DATABASE_URL`, when set, takes precedence over the discrete `DB_*`
/// connection values. Pool sizing and retry settings apply either way.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Full connection URL (optional).
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Upper bound on concurrently open connections (default: `10`).
    pub max_connections: u32,
    /// How long a request waits for a free connection before giving up
    /// (default: `30`).
    pub acquire_timeout_secs: u64,
    /// Number of startup connection attempts (default: `5`).
    pub connect_attempts: u32,
    /// Fixed delay between startup connection attempts (default: `5`).
    pub connect_retry_delay_secs: u64,
}

impl DbConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default      |
    /// |-------------------------------|--------------|
    /// | `DATABASE_URL`                | unset        |
    /// | `DB_HOST`                     | `localhost`  |
    /// | `DB_PORT`                     | `5432`       |
    /// | `DB_USER`                     | `postgres`   |
    /// | `DB_PASSWORD`                 | empty        |
    /// | `DB_NAME`                     | `facegate`   |
    /// | `DB_CONNECTION_LIMIT`         | `10`         |
    /// | `DB_ACQUIRE_TIMEOUT_SECS`     | `30`         |
    /// | `DB_CONNECT_ATTEMPTS`         | `5`          |
    /// | `DB_CONNECT_RETRY_DELAY_SECS` | `5`          |
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into()),
            port: env_parse("DB_PORT", 5432),
            user: std::env::var("DB_USER").unwrap_or_else(|_| "postgres".into()),
            password: std::env::var("DB_PASSWORD").unwrap_or_default(),
            database: std::env::var("DB_NAME").unwrap_or_else(|_| "facegate".into()),
            max_connections: env_parse("DB_CONNECTION_LIMIT", 10),
            acquire_timeout_secs: env_parse("DB_ACQUIRE_TIMEOUT_SECS", 30),
            connect_attempts: env_parse("DB_CONNECT_ATTEMPTS", 5),
            connect_retry_delay_secs: env_parse("DB_CONNECT_RETRY_DELAY_SECS", 5),
        }
    }

    /// Build driver connection options from this configuration.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.url {
            Some(url) => PgConnectOptions::from_str(url),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.database)),
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn connect_retry_delay(&self) -> Duration {
        Duration::from_secs(self.connect_retry_delay_secs)
    }
}

/// Parse an environment variable, falling back to `default` when unset.
///
/// Panics on a present-but-invalid value so misconfiguration fails at
/// startup rather than on first use.
fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid number: {e}")),
        Err(_) => default,
    }
}
