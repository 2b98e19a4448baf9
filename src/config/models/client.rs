//! Client configuration

use super::*;
use crate::core::dispatcher::DispatcherConfig;
use crate::core::rate_limiter::{RateWindow, TimeUnit};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Window the request limit applies to
    pub time_unit: TimeUnit,
    /// Maximum requests per window; also the worker pool size
    #[serde(default = "default_request_limit")]
    pub request_limit: u32,
    /// Document creation endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// Upper bound on a single dispatched send in seconds
    #[serde(default = "default_send_timeout")]
    pub send_timeout: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(TimeUnit::Seconds, default_request_limit())
    }
}

impl ClientConfig {
    /// Configuration with default transport settings
    pub fn new(time_unit: TimeUnit, request_limit: u32) -> Self {
        Self {
            time_unit,
            request_limit,
            endpoint: default_endpoint(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            send_timeout: default_send_timeout(),
            user_agent: default_user_agent(),
        }
    }

    /// Validated rate window
    pub fn rate_window(&self) -> Result<RateWindow> {
        RateWindow::new(self.time_unit, self.request_limit)
    }

    pub fn dispatcher_config(&self) -> DispatcherConfig {
        DispatcherConfig {
            send_timeout: Duration::from_secs(self.send_timeout),
        }
    }
}
