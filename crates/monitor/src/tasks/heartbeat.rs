//! Liveness Heartbeat

use std::time::Duration;
use task_scheduler::{PeriodicDeadline, TaskPriority};
use tokio::time::Instant;
use tracing::{debug, info};

/// Status indicator output (the board's LED)
pub trait IndicatorLed: Send {
    /// Drive the output high (`true`) or low
    fn set(&mut self, on: bool);
}

/// Indicator that only records its level in the log
#[derive(Debug, Default)]
pub struct LogLed {
    on: bool,
}

impl IndicatorLed for LogLed {
    fn set(&mut self, on: bool) {
        if self.on != on {
            debug!("LED -> {}", if on { "high" } else { "low" });
        }
        self.on = on;
    }
}

/// Blinks the indicator and logs that the node is alive
pub struct HeartbeatTask<L> {
    led: L,
    half_period: Duration,
    started: Instant,
}

impl<L: IndicatorLed> HeartbeatTask<L> {
    /// Background priority
    pub const PRIORITY: TaskPriority = TaskPriority::Idle;

    /// Create a heartbeat toggling every `half_period`
    pub fn new(led: L, half_period: Duration) -> Self {
        Self {
            led,
            half_period,
            started: Instant::now(),
        }
    }

    /// Drive the indicator and log its state with the uptime
    pub fn beat(&mut self, on: bool) {
        self.led.set(on);
        info!(
            "System alive and monitoring: {} @ {}ms",
            if on { "ON" } else { "OFF" },
            self.started.elapsed().as_millis()
        );
    }

    /// Toggle forever on absolute deadlines
    pub async fn run(mut self) {
        let mut deadline = PeriodicDeadline::new(self.half_period);
        debug!("Heartbeat started: half_period={}ms", deadline.period().as_millis());
        let mut on = true;
        loop {
            self.beat(on);
            on = !on;
            deadline.wait().await;
        }
    }
}
