//! # crpt-api-rs
//!
//! Thread-safe client for the CRPT registry document API that never issues
//! more than `request_limit` calls per `time_unit`, no matter how many threads
//! share it.
//!
//! ## Features
//!
//! - **Rate gating**: each call is delayed just long enough to keep calls at
//!   least `time_unit / request_limit` apart
//! - **Bounded worker pool**: at most `request_limit` sends run at once
//! - **Blocking or async**: `post_document` blocks the caller, `post_document_async` awaits
//! - **Failures as values**: callers only ever see a status code
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crpt_api::{CrptApi, Document, TimeUnit};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // At most 5 requests per second
//!     let api = CrptApi::new(TimeUnit::Seconds, 5)?;
//!
//!     let document = Document {
//!         doc_id: Some("doc-1".to_string()),
//!         ..Default::default()
//!     };
//!     let status = api.post_document(&document, "signature");
//!     println!("Registry answered {}", status);
//!     Ok(())
//! }
//! ```
//!
//! ## Known limitation
//!
//! The gate measures each reservation against the previous *request* instant,
//! not against the instant the previous send actually fires. A burst of
//! concurrent callers can therefore schedule more than `request_limit` sends
//! inside one window.

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

mod client;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use client::{CrptApi, FAILURE_STATUS};
pub use config::ClientConfig;
pub use crate::core::dispatcher::{
    Dispatcher, DispatcherConfig, Submission, SubmissionFailure, SubmissionResult,
};
pub use crate::core::document::{Description, Document, DocumentJsonWriter, Product};
pub use crate::core::rate_limiter::{Clock, RateGate, RateWindow, SystemClock, TimeUnit};
pub use crate::core::transport::{HttpTransport, HttpTransportConfig, Transport, TransportError};
pub use utils::error::{CrptError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
