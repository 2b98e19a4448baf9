//! Core dispatcher implementation

use super::types::{DispatcherConfig, Submission, SubmissionFailure, SubmissionResult};
use crate::core::rate_limiter::{RateGate, RateWindow};
use crate::core::transport::Transport;
use crate::utils::error::{CrptError, Result};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tokio::sync::{Semaphore, oneshot};
use tracing::{debug, info, warn};

/// Fallback when the host parallelism cannot be queried
const FALLBACK_WORKER_THREADS: usize = 4;

/// Schedules rate-limited sends on a pool of `request_limit` slots
///
/// Callers may submit from any number of threads at once. Each call reserves
/// its own slot on the gate and waits only for its own send. The pool bound is
/// enforced by permits; the runtime underneath runs on at most one thread per
/// core, so a large `request_limit` costs no extra OS threads.
pub struct Dispatcher {
    gate: RateGate,
    transport: Arc<dyn Transport>,
    /// Bounds in-flight sends to `request_limit`
    permits: Arc<Semaphore>,
    worker_threads: usize,
    /// Taken on drop
    runtime: Option<Runtime>,
    config: DispatcherConfig,
}

impl Dispatcher {
    /// Create a dispatcher whose pool has exactly `request_limit` slots
    pub fn new(
        window: RateWindow,
        transport: Arc<dyn Transport>,
        config: DispatcherConfig,
    ) -> Result<Self> {
        Self::with_gate(RateGate::new(window), transport, config)
    }

    /// Create a dispatcher around an existing gate
    pub fn with_gate(
        gate: RateGate,
        transport: Arc<dyn Transport>,
        config: DispatcherConfig,
    ) -> Result<Self> {
        let pool_size = gate.window().request_limit() as usize;
        let worker_threads = worker_threads_for(pool_size);

        let runtime = Builder::new_multi_thread()
            .worker_threads(worker_threads)
            .thread_name("crpt-dispatch")
            .enable_all()
            .build()
            .map_err(CrptError::WorkerPool)?;

        info!(
            pool_size,
            worker_threads,
            min_interval_ms = gate.min_interval().as_secs_f64() * 1000.0,
            "Dispatcher started"
        );

        Ok(Self {
            gate,
            transport,
            permits: Arc::new(Semaphore::new(pool_size.min(Semaphore::MAX_PERMITS))),
            worker_threads,
            runtime: Some(runtime),
            config,
        })
    }

    /// Submit and block the calling thread until the send completes
    ///
    /// Never panics on send failures: every outcome is a [`SubmissionResult`].
    /// Safe to call from inside an async context, although that parks the
    /// calling worker thread; prefer [`Dispatcher::submit_async`] there.
    pub fn submit(&self, submission: Submission) -> SubmissionResult {
        let receiver = self.schedule(submission);
        futures::executor::block_on(receiver).unwrap_or(Err(SubmissionFailure::Cancelled))
    }

    /// Submit and await the send without blocking the current thread
    pub async fn submit_async(&self, submission: Submission) -> SubmissionResult {
        let receiver = self.schedule(submission);
        receiver.await.unwrap_or(Err(SubmissionFailure::Cancelled))
    }

    /// Reserve a slot and hand the send to the pool
    fn schedule(&self, submission: Submission) -> oneshot::Receiver<SubmissionResult> {
        let delay = self.gate.reserve_slot();
        let (sender, receiver) = oneshot::channel();

        match &self.runtime {
            Some(runtime) => {
                debug!(delay_ms = delay.as_secs_f64() * 1000.0, "Scheduling send");
                let transport = Arc::clone(&self.transport);
                let permits = Arc::clone(&self.permits);
                let send_timeout = self.config.send_timeout;

                runtime.spawn(async move {
                    let result =
                        run_send(transport, permits, submission, delay, send_timeout).await;
                    // The caller may have stopped waiting; nothing to report then.
                    let _ = sender.send(result);
                });
            }
            None => {
                let _ = sender.send(Err(SubmissionFailure::Rejected(
                    "worker pool is shut down".to_string(),
                )));
            }
        }

        receiver
    }

    pub fn gate(&self) -> &RateGate {
        &self.gate
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Number of concurrent sends the pool admits
    pub fn pool_size(&self) -> usize {
        self.gate.window().request_limit() as usize
    }

    /// OS threads backing the pool
    pub fn worker_threads(&self) -> usize {
        self.worker_threads
    }

    /// Stop accepting sends; queued and later submissions are rejected
    pub fn close(&self) {
        self.permits.close();
    }
}

fn worker_threads_for(pool_size: usize) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(FALLBACK_WORKER_THREADS);
    pool_size.min(cores).max(1)
}

/// Wait out the delay, take a pool permit and perform exactly one send
async fn run_send(
    transport: Arc<dyn Transport>,
    permits: Arc<Semaphore>,
    submission: Submission,
    delay: Duration,
    send_timeout: Duration,
) -> SubmissionResult {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let _permit = permits
        .acquire_owned()
        .await
        .map_err(|e| SubmissionFailure::Rejected(e.to_string()))?;

    match tokio::time::timeout(send_timeout, transport.post(submission)).await {
        Ok(Ok(status)) => Ok(status),
        Ok(Err(e)) => {
            warn!(timeout = e.is_timeout(), "Send failed: {}", e);
            Err(e.into())
        }
        Err(_) => {
            warn!(timeout_ms = send_timeout.as_millis() as u64, "Send timed out");
            Err(SubmissionFailure::Timeout(send_timeout))
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("gate", &self.gate)
            .field("available_permits", &self.permits.available_permits())
            .field("worker_threads", &self.worker_threads)
            .field("running", &self.runtime.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.close();
        if let Some(runtime) = self.runtime.take() {
            // Dropping a runtime from async context panics; this never blocks.
            runtime.shutdown_background();
        }
    }
}
