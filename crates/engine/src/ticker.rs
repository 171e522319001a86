//! Repeating timer driven by a caller-supplied clock.

use std::time::{Duration, Instant};

/// Fires once per `period`. Dropping it cancels it.
///
/// A late poll fires once and schedules the next tick a full period after the
/// poll; ticks missed in between are not replayed.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    /// Start a timer whose first tick is one `period` after `now`.
    pub fn start(now: Instant, period: Duration) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Time left until the next tick (zero if overdue).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Consume a due tick. Returns false if the tick is not due yet.
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;
        true
    }
}
