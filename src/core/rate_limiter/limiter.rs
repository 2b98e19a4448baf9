//! Core rate gate implementation

use super::clock::{Clock, SystemClock};
use super::types::RateWindow;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Computes how long each caller must wait before acting
///
/// The gate remembers the instant of the last reservation. A new reservation
/// that arrives sooner than `min_interval` after it is told to wait out the
/// remainder. The stored instant is always the *request* instant, never the
/// instant the caller will actually fire at, so a burst of concurrent callers
/// each gets a delay measured against real time rather than against each
/// other's scheduled sends. Under such bursts more than `request_limit`
/// sends can land inside a single window.
#[derive(Debug)]
pub struct RateGate {
    window: RateWindow,
    min_interval: Duration,
    clock: Arc<dyn Clock>,
    /// `None` until the first reservation when the clock cannot be
    /// rewound by `min_interval` (e.g. shortly after boot)
    last_reserved: Mutex<Option<Instant>>,
}

impl RateGate {
    /// Create a gate driven by the system clock
    pub fn new(window: RateWindow) -> Self {
        Self::with_clock(window, Arc::new(SystemClock))
    }

    /// Create a gate driven by a custom clock
    ///
    /// The gate is seeded one interval in the past so the first
    /// reservation is never delayed.
    pub fn with_clock(window: RateWindow, clock: Arc<dyn Clock>) -> Self {
        let min_interval = window.min_interval();
        let seed = clock.now().checked_sub(min_interval);
        Self {
            window,
            min_interval,
            clock,
            last_reserved: Mutex::new(seed),
        }
    }

    /// Reserve the next slot and return the delay to wait before using it
    pub fn reserve_slot(&self) -> Duration {
        let mut last_reserved = self.last_reserved.lock();
        let now = self.clock.now();

        let elapsed = match *last_reserved {
            Some(previous) => now.saturating_duration_since(previous),
            None => self.min_interval,
        };
        let delay = self.min_interval.saturating_sub(elapsed);

        *last_reserved = Some(now);
        drop(last_reserved);

        if !delay.is_zero() {
            debug!(
                delay_ms = delay.as_secs_f64() * 1000.0,
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                "Reservation throttled"
            );
        }

        delay
    }

    pub fn window(&self) -> RateWindow {
        self.window
    }

    /// Minimum spacing between two reservations
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    #[cfg(test)]
    pub(super) fn last_reserved(&self) -> Option<Instant> {
        *self.last_reserved.lock()
    }
}
