//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `LIGHTBNB_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `LIGHTBNB_DB_MAX_CONNECTIONS` - Pool size ceiling (default: 10)
//! - `LIGHTBNB_DB_MIN_CONNECTIONS` - Idle connections kept open (default: 2)
//! - `LIGHTBNB_DB_ACQUIRE_TIMEOUT_SECS` - Seconds to wait for a pooled connection (default: 10)

use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

const DATABASE_URL_VAR: &str = "LIGHTBNB_DATABASE_URL";
const FALLBACK_DATABASE_URL_VAR: &str = "DATABASE_URL";
const MAX_CONNECTIONS_VAR: &str = "LIGHTBNB_DB_MAX_CONNECTIONS";
const MIN_CONNECTIONS_VAR: &str = "LIGHTBNB_DB_MIN_CONNECTIONS";
const ACQUIRE_TIMEOUT_VAR: &str = "LIGHTBNB_DB_ACQUIRE_TIMEOUT_SECS";

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MIN_CONNECTIONS: u32 = 2;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Connection settings for the LightBnB `PostgreSQL` store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// Minimum number of idle connections
    pub min_connections: u32,
    /// How long to wait for a free connection before failing
    pub acquire_timeout: Duration,
}

impl StoreConfig {
    /// Build a configuration for `database_url` with default pool settings.
    #[must_use]
    pub const fn new(database_url: SecretString) -> Self {
        Self {
            database_url,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the database URL is missing or a numeric
    /// setting does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`StoreConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .or_else(|| lookup(FALLBACK_DATABASE_URL_VAR))
            .map(SecretString::from)
            .ok_or_else(|| ConfigError::MissingEnvVar(DATABASE_URL_VAR.to_string()))?;

        let max_connections =
            parse_or_default(&lookup, MAX_CONNECTIONS_VAR, DEFAULT_MAX_CONNECTIONS)?;
        let min_connections =
            parse_or_default(&lookup, MIN_CONNECTIONS_VAR, DEFAULT_MIN_CONNECTIONS)?;
        let acquire_timeout_secs =
            parse_or_default(&lookup, ACQUIRE_TIMEOUT_VAR, DEFAULT_ACQUIRE_TIMEOUT_SECS)?;

        if max_connections == 0 {
            return Err(ConfigError::InvalidEnvVar(
                MAX_CONNECTIONS_VAR.to_string(),
                "must be at least 1".to_string(),
            ));
        }
        if min_connections > max_connections {
            return Err(ConfigError::InvalidEnvVar(
                MIN_CONNECTIONS_VAR.to_string(),
                format!("must not exceed {MAX_CONNECTIONS_VAR} ({max_connections})"),
            ));
        }

        Ok(Self {
            database_url,
            max_connections,
            min_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}
