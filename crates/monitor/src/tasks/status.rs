//! Periodic Status Line

use std::time::Duration;
use task_scheduler::{PeriodicDeadline, TaskPriority};
use tokio::time::Instant;
use tracing::info;

/// Logs a periodic "system stable" update with the measured period
pub struct StatusTask {
    period: Duration,
    started: Instant,
    last_update: Option<Instant>,
}

impl StatusTask {
    /// Background priority
    pub const PRIORITY: TaskPriority = TaskPriority::Idle;

    /// Create a status task; the first measured period starts now
    pub fn new(period: Duration) -> Self {
        let now = Instant::now();
        Self {
            period,
            started: now,
            last_update: None,
        }
    }

    /// Emit one update; returns the time since the previous one
    pub fn report(&mut self) -> Duration {
        let now = Instant::now();
        let measured = now - self.last_update.unwrap_or(self.started);
        self.last_update = Some(now);

        info!(
            "Monitor update: system stable @ {}ms [period = {}ms]",
            (now - self.started).as_millis(),
            measured.as_millis()
        );
        measured
    }

    /// Report forever on absolute deadlines
    pub async fn run(mut self) {
        let mut deadline = PeriodicDeadline::new(self.period);
        loop {
            self.report();
            deadline.wait().await;
        }
    }
}
