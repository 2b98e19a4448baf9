//! Configuration management for the client
//!
//! Loads [`ClientConfig`] from YAML files or the environment and validates it.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::core::rate_limiter::TimeUnit;
use crate::utils::error::{CrptError, Result};
use std::env;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Environment variable names read by [`ClientConfig::from_env`]
pub mod env_keys {
    pub const TIME_UNIT: &str = "CRPT_TIME_UNIT";
    pub const REQUEST_LIMIT: &str = "CRPT_REQUEST_LIMIT";
    pub const ENDPOINT: &str = "CRPT_ENDPOINT";
    pub const REQUEST_TIMEOUT: &str = "CRPT_REQUEST_TIMEOUT";
    pub const CONNECT_TIMEOUT: &str = "CRPT_CONNECT_TIMEOUT";
    pub const SEND_TIMEOUT: &str = "CRPT_SEND_TIMEOUT";
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;

        let config = Self::from_yaml_str(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// `CRPT_TIME_UNIT` and `CRPT_REQUEST_LIMIT` are required.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        if dotenvy::dotenv().is_ok() {
            debug!("Loaded .env file");
        }

        let time_unit: TimeUnit = required_var(env_keys::TIME_UNIT)?;
        let request_limit: u32 = required_var(env_keys::REQUEST_LIMIT)?;

        let mut config = Self::new(time_unit, request_limit);
        if let Some(endpoint) = get_env_var(env_keys::ENDPOINT) {
            config.endpoint = endpoint;
        }
        if let Some(timeout) = optional_var(env_keys::REQUEST_TIMEOUT)? {
            config.request_timeout = timeout;
        }
        if let Some(timeout) = optional_var(env_keys::CONNECT_TIMEOUT)? {
            config.connect_timeout = timeout;
        }
        if let Some(timeout) = optional_var(env_keys::SEND_TIMEOUT)? {
            config.send_timeout = timeout;
        }

        config.validate()?;
        Ok(config)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn get_env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| CrptError::config(format!("Invalid value for {}: {} ({})", key, raw, e)))
}

fn required_var<T>(key: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env_var(key)
        .ok_or_else(|| CrptError::config(format!("Missing environment variable {}", key)))?;
    parse_var(key, &raw)
}

fn optional_var<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_env_var(key).map(|raw| parse_var(key, &raw)).transpose()
}
