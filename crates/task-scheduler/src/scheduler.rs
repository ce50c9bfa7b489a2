//! Absolute-Deadline Periodic Delay

use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Periodic delay anchored to intended wake instants.
///
/// Each wake is computed from the previous *intended* wake plus the period,
/// never from the time the caller finished its work, so processing jitter
/// does not accumulate into phase drift. After an overrun the next deadline
/// is already in the past and `wait` returns immediately until the schedule
/// has caught up.
#[derive(Debug)]
pub struct PeriodicDeadline {
    /// Fixed period
    period: Duration,
    /// Last intended wake instant
    last_wake: Instant,
    /// Deadlines already passed when `wait` was called
    overruns: u64,
}

impl PeriodicDeadline {
    /// Create a schedule whose reference instant is now
    pub fn new(period: Duration) -> Self {
        Self::starting_at(Instant::now(), period)
    }

    /// Create a schedule from an explicit reference instant
    pub fn starting_at(reference: Instant, period: Duration) -> Self {
        assert!(!period.is_zero(), "Period must be > 0");
        Self {
            period,
            last_wake: reference,
            overruns: 0,
        }
    }

    /// Sleep until the next intended wake instant and return it
    pub async fn wait(&mut self) -> Instant {
        let next_wake = self.last_wake + self.period;
        self.last_wake = next_wake;

        if next_wake <= Instant::now() {
            self.overruns += 1;
            debug!(
                "Deadline overrun #{}: behind by {}ms",
                self.overruns,
                next_wake.elapsed().as_millis()
            );
        } else {
            tokio::time::sleep_until(next_wake).await;
        }

        next_wake
    }

    /// Get the period
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Get the number of deadlines that had already passed
    pub fn overruns(&self) -> u64 {
        self.overruns
    }
}
