//! Wall-clock source for note modification timestamps.
//!
//! Services take a `Clock` instead of reading the system time directly, so
//! tests can drive timestamps deterministically.

use chrono::Utc;

/// Source of "now" in Unix epoch milliseconds.
pub trait Clock {
    fn now_epoch_ms(&self) -> i64;
}

/// Clock backed by the system UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
