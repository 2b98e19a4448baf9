//! Rate gate implementation
//!
//! Spaces reservations at least `unit / request_limit` apart. Each reservation
//! returns the delay the caller must wait before acting.

mod clock;
mod limiter;
mod types;


// Re-export public types
pub use clock::{Clock, SystemClock};
pub use limiter::RateGate;
pub use types::{RateWindow, TimeUnit};

#[cfg(test)]
pub(crate) use clock::mock::{MockClock, TickingClock};
