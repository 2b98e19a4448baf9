//! Utility modules for the client
//!
//! - **error**: Error types and the crate `Result` alias
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{CrptError, Result};
pub use logging::init_logging;
