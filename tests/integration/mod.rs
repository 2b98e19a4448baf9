//! Integration tests for crpt-api-rs

pub mod config_tests;
pub mod http_transport_tests;
