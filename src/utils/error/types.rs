//! Error types for the client

use crate::core::rate_limiter::TimeUnit;
use thiserror::Error;

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, CrptError>;

/// Main error type for the client
#[derive(Error, Debug)]
pub enum CrptError {
    /// The window unit is too fine-grained to be split into sub-intervals
    #[error("{0} cannot be divided into subintervals")]
    InvalidTimeUnit(TimeUnit),

    /// Request limit must be positive
    #[error("request_limit must be greater than 0, got {0}")]
    InvalidRequestLimit(u32),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Worker pool could not be started
    #[error("Failed to start worker pool: {0}")]
    WorkerPool(#[source] std::io::Error),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
