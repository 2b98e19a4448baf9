//! Configuration validation

use super::models::ClientConfig;
use crate::utils::error::{CrptError, Result};
use tracing::debug;
use url::Url;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating client configuration");

        self.rate_window()?;
        validate_endpoint(&self.endpoint)?;

        if self.request_timeout == 0 {
            return Err(CrptError::config("request_timeout must be greater than 0"));
        }
        if self.connect_timeout == 0 {
            return Err(CrptError::config("connect_timeout must be greater than 0"));
        }
        if self.send_timeout == 0 {
            return Err(CrptError::config("send_timeout must be greater than 0"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(CrptError::config("user_agent cannot be empty"));
        }

        Ok(())
    }
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint)
        .map_err(|e| CrptError::config(format!("endpoint has invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(CrptError::config(format!(
                "endpoint must use http:// or https:// scheme, got: {}",
                scheme
            )));
        }
    }

    if url.host_str().is_none() {
        return Err(CrptError::config("endpoint URL must have a valid host"));
    }

    Ok(())
}
