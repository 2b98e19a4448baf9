//! Dispatcher types

use crate::core::transport::TransportError;
use std::time::Duration;
use thiserror::Error;

/// One logical request: a serialized payload and the caller's signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    payload: String,
    signature: String,
}

impl Submission {
    pub fn new(payload: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            signature: signature.into(),
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn into_parts(self) -> (String, String) {
        (self.payload, self.signature)
    }
}

/// Why a submission produced no status code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailure {
    /// The send exceeded its deadline
    #[error("Send timed out after {0:?}")]
    Timeout(Duration),

    /// The transport could not complete the exchange
    #[error("Transport error: {0}")]
    Transport(String),

    /// The scheduled task went away before reporting back
    #[error("Scheduled send was cancelled")]
    Cancelled,

    /// The worker pool refused the task
    #[error("Worker pool rejected the send: {0}")]
    Rejected(String),
}

impl From<TransportError> for SubmissionFailure {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Timeout(after) => SubmissionFailure::Timeout(after),
            // Client-side timeout that did not report its deadline
            other if other.is_timeout() => SubmissionFailure::Timeout(Duration::ZERO),
            other => SubmissionFailure::Transport(other.to_string()),
        }
    }
}

/// Outcome of one submission: the response status or the failure kind
pub type SubmissionResult = std::result::Result<u16, SubmissionFailure>;

/// Dispatcher tuning
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Upper bound on a single send, after the rate delay has elapsed
    pub send_timeout: Duration,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            send_timeout: Duration::from_secs(30),
        }
    }
}
