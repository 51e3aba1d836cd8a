//! # Service Configuration
//!
//! Configuration is read from environment variables once at start-up. A `.env`
//! file is honoured because `main` loads it with `dotenvy` before calling
//! [`Config::from_env`].
//!
//! | Variable                 | Default                     |
//! |--------------------------|-----------------------------|
//! | `MONGO_URL`              | `mongodb://localhost:27017` |
//! | `DB_NAME`                | `test_database`             |
//! | `CORS_ORIGINS`           | `*`                         |
//! | `BIND_ADDR`              | `0.0.0.0:8000`              |
//! | `MONGO_PROBE_TIMEOUT_MS` | `5000`                      |

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use crate::utils::constant::*;

/// Errors raised while reading configuration. These abort start-up.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for `{name}`: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Settings needed to reach the document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub mongo_url: String,
    pub db_name: String,
    pub probe_timeout: Duration,
}

/// Full service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub cors_origins: Vec<String>,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads the configuration from the process environment, applying defaults
    /// for every unset variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mongo_url = env::var("MONGO_URL").unwrap_or_else(|_| DEFAULT_MONGO_URL.to_string());
        let db_name = env::var("DB_NAME").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string());
        let cors_origins = parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        );

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                value,
            })?,
            Err(_) => DEFAULT_BIND_ADDR,
        };

        let probe_timeout = match env::var("MONGO_PROBE_TIMEOUT_MS") {
            Ok(value) => value
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::Invalid {
                    name: "MONGO_PROBE_TIMEOUT_MS",
                    value,
                })?,
            Err(_) => DEFAULT_PROBE_TIMEOUT,
        };

        Ok(Self {
            store: StoreConfig {
                mongo_url,
                db_name,
                probe_timeout,
            },
            cors_origins,
            bind_addr,
        })
    }
}

/// Splits a comma-separated origin list, trimming whitespace and dropping
/// empty entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect()
}
