//! Rate window types

use crate::utils::error::{CrptError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Length of the rolling window a request limit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Length of one unit in nanoseconds
    pub const fn as_nanos(self) -> u64 {
        match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Seconds => 1_000_000_000,
            TimeUnit::Minutes => 60 * 1_000_000_000,
            TimeUnit::Hours => 60 * 60 * 1_000_000_000,
            TimeUnit::Days => 24 * 60 * 60 * 1_000_000_000,
        }
    }

    /// Length of one unit
    pub const fn as_duration(self) -> Duration {
        Duration::from_nanos(self.as_nanos())
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "NANOSECONDS",
            TimeUnit::Microseconds => "MICROSECONDS",
            TimeUnit::Milliseconds => "MILLISECONDS",
            TimeUnit::Seconds => "SECONDS",
            TimeUnit::Minutes => "MINUTES",
            TimeUnit::Hours => "HOURS",
            TimeUnit::Days => "DAYS",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = CrptError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NANOSECONDS" => Ok(TimeUnit::Nanoseconds),
            "MICROSECONDS" => Ok(TimeUnit::Microseconds),
            "MILLISECONDS" => Ok(TimeUnit::Milliseconds),
            "SECONDS" => Ok(TimeUnit::Seconds),
            "MINUTES" => Ok(TimeUnit::Minutes),
            "HOURS" => Ok(TimeUnit::Hours),
            "DAYS" => Ok(TimeUnit::Days),
            other => Err(CrptError::config(format!("Unknown time unit: {}", other))),
        }
    }
}

/// Rate limit: at most `request_limit` calls per `unit`
///
/// Immutable once built. The only way to obtain one is [`RateWindow::new`],
/// which rejects windows that cannot be split into a per-request interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateWindow {
    unit: TimeUnit,
    request_limit: u32,
}

impl RateWindow {
    pub fn new(unit: TimeUnit, request_limit: u32) -> Result<Self> {
        if unit == TimeUnit::Nanoseconds {
            return Err(CrptError::InvalidTimeUnit(unit));
        }
        if request_limit == 0 {
            return Err(CrptError::InvalidRequestLimit(request_limit));
        }
        Ok(Self {
            unit,
            request_limit,
        })
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn request_limit(&self) -> u32 {
        self.request_limit
    }

    /// Minimum spacing between two reservations, truncated to whole nanoseconds
    pub fn min_interval(&self) -> Duration {
        Duration::from_nanos(self.unit.as_nanos() / u64::from(self.request_limit))
    }
}
