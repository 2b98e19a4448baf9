//! Transports for exercising the dispatcher without a network

use async_trait::async_trait;
use crpt_api::{Submission, Transport, TransportError};
use parking_lot::Mutex;
use std::time::Instant;

/// Records the instant and signature of every send
#[derive(Default)]
pub struct RecordingTransport {
    sends: Mutex<Vec<(String, Instant)>>,
}

impl RecordingTransport {
    pub fn sends(&self) -> Vec<(String, Instant)> {
        self.sends.lock().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post(&self, submission: Submission) -> Result<u16, TransportError> {
        if submission.signature() == "unreachable" {
            return Err(TransportError::network("host unreachable"));
        }
        self.sends
            .lock()
            .push((submission.signature().to_string(), Instant::now()));
        Ok(200)
    }
}
