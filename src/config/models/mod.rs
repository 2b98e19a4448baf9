//! Configuration data models

pub mod client;

pub use client::*;

/// Default request limit per window
pub fn default_request_limit() -> u32 {
    1
}

/// Default registry endpoint
pub fn default_endpoint() -> String {
    crate::core::transport::DEFAULT_ENDPOINT.to_string()
}

/// Default whole-request timeout in seconds
pub fn default_request_timeout() -> u64 {
    30
}

/// Default connect timeout in seconds
pub fn default_connect_timeout() -> u64 {
    10
}

/// Default bound on a single dispatched send in seconds
pub fn default_send_timeout() -> u64 {
    30
}

/// Default user agent
pub fn default_user_agent() -> String {
    format!("{}/{}", crate::NAME, crate::VERSION)
}
