//! Helper functions for creating specific error types

use super::types::CrptError;

impl CrptError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error was raised while constructing the client
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            CrptError::InvalidTimeUnit(_)
                | CrptError::InvalidRequestLimit(_)
                | CrptError::Config(_)
                | CrptError::Yaml(_)
                | CrptError::WorkerPool(_)
                | CrptError::HttpClient(_)
        )
    }
}
