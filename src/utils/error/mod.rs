//! Error handling for the client
//!
//! Construction, configuration and serialization failures surface as [`CrptError`].
//! Per-call dispatch failures never reach this type; they are recovered into
//! [`crate::core::dispatcher::SubmissionFailure`] values instead.

mod helpers;
mod types;

pub use types::{CrptError, Result};
