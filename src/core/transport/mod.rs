//! Transport seam for submissions
//!
//! The dispatcher only knows that a [`Transport`] turns one submission into one
//! status code. [`HttpTransport`] is the production implementation.

mod http;

pub use http::{DEFAULT_ENDPOINT, HttpTransport, HttpTransportConfig, SIGNATURE_HEADER};

use crate::core::dispatcher::Submission;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Failure to complete a single send
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The send did not complete in time
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Network errors
    #[error("Network error: {0}")]
    Network(String),
}

impl TransportError {
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network(message.into())
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            TransportError::Http(e) => e.is_timeout(),
            TransportError::Timeout(_) => true,
            TransportError::Network(_) => false,
        }
    }
}

/// Performs exactly one outbound call per submission
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the submission and return the response status code
    ///
    /// Non-2xx statuses are returned as `Ok`; only failures to obtain a
    /// response at all are errors.
    async fn post(&self, submission: Submission) -> Result<u16, TransportError>;
}
