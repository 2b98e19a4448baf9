//! Rate-limited dispatch of submissions
//!
//! The dispatcher reserves a slot on the [`RateGate`](crate::core::rate_limiter::RateGate),
//! schedules the send on a worker pool sized to the request limit and hands the
//! outcome back to the caller.

mod dispatcher;
mod types;


pub use dispatcher::Dispatcher;
pub use types::{DispatcherConfig, Submission, SubmissionFailure, SubmissionResult};
