//! Core functionality for the client
//!
//! Rate gating, dispatch, transport and the document model.

pub mod dispatcher;
pub mod document;
pub mod rate_limiter;
pub mod transport;
