//! Common test utilities for crpt-api-rs

pub mod fixtures;
pub mod transports;

pub use fixtures::DocumentFactory;
pub use transports::RecordingTransport;
