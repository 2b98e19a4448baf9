//! Public entry point
//!
//! [`CrptApi`] is the only surface most callers need: build it once with a
//! rate limit, share it between threads and call
//! [`post_document`](CrptApi::post_document). Every failure below this point is
//! reported as [`FAILURE_STATUS`].

use crate::config::{ClientConfig, Validate};
use crate::core::dispatcher::{
    Dispatcher, DispatcherConfig, Submission, SubmissionFailure, SubmissionResult,
};
use crate::core::document::{Document, DocumentJsonWriter};
use crate::core::rate_limiter::{RateWindow, TimeUnit};
use crate::core::transport::{HttpTransport, HttpTransportConfig, Transport};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Status returned when no HTTP status could be obtained
pub const FAILURE_STATUS: u16 = 400;

/// Thread-safe, rate-limited registry client
#[derive(Debug)]
pub struct CrptApi {
    dispatcher: Dispatcher,
}

impl CrptApi {
    /// Create a client allowing at most `request_limit` requests per `time_unit`
    ///
    /// Fails for [`TimeUnit::Nanoseconds`] and for a zero limit.
    pub fn new(time_unit: TimeUnit, request_limit: u32) -> Result<Self> {
        Self::from_config(&ClientConfig::new(time_unit, request_limit))
    }

    /// Create a client from a full configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(HttpTransportConfig::from(config))?;
        Self::with_transport(
            config.rate_window()?,
            Arc::new(transport),
            config.dispatcher_config(),
        )
    }

    /// Create a client over a custom transport
    pub fn with_transport(
        window: RateWindow,
        transport: Arc<dyn Transport>,
        config: DispatcherConfig,
    ) -> Result<Self> {
        info!(
            unit = %window.unit(),
            request_limit = window.request_limit(),
            "Creating registry client"
        );
        let dispatcher = Dispatcher::new(window, transport, config)?;
        Ok(Self { dispatcher })
    }

    /// Submit a document signed with `signature`
    ///
    /// Blocks until the rate-limited send completes. Returns the HTTP status of
    /// the response, or [`FAILURE_STATUS`] if serialization, scheduling or the
    /// network call failed.
    pub fn post_document(&self, document: &Document, signature: &str) -> u16 {
        match DocumentJsonWriter::write_document(document) {
            Ok(payload) => {
                let result = self.dispatcher.submit(Submission::new(payload, signature));
                collapse(result)
            }
            Err(e) => {
                warn!("Failed to serialize document: {}", e);
                FAILURE_STATUS
            }
        }
    }

    /// Async variant of [`post_document`](CrptApi::post_document)
    pub async fn post_document_async(&self, document: &Document, signature: &str) -> u16 {
        match DocumentJsonWriter::write_document(document) {
            Ok(payload) => {
                let result = self
                    .dispatcher
                    .submit_async(Submission::new(payload, signature))
                    .await;
                collapse(result)
            }
            Err(e) => {
                warn!("Failed to serialize document: {}", e);
                FAILURE_STATUS
            }
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

fn collapse(result: SubmissionResult) -> u16 {
    result.unwrap_or_else(|failure: SubmissionFailure| {
        warn!(status = FAILURE_STATUS, "Submission failed: {}", failure);
        FAILURE_STATUS
    })
}
