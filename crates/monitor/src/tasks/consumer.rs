//! Button-Triggered Statistics Consumer

use event_signal::SignalWaiter;
use ring_buffer::{GuardedRing, SnapshotOutcome};
use stats_engine::StatisticsSnapshot;
use std::sync::Arc;
use task_scheduler::TaskPriority;
use tracing::info;

/// Figures produced by one consumer activation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumerReport {
    pub stats: StatisticsSnapshot,
    /// Whether the ring copy was refreshed for this activation
    pub freshness: SnapshotOutcome,
}

/// Waits for the button signal, then summarizes a private copy of the ring.
pub struct ConsumerTask<const N: usize> {
    ring: Arc<GuardedRing<N>>,
    waiter: SignalWaiter,
    /// Last good copy of the ring
    copy: [f64; N],
}

impl<const N: usize> ConsumerTask<N> {
    /// Above the sampler so a press is served promptly
    pub const PRIORITY: TaskPriority = TaskPriority::Response;

    /// Create a consumer with a zeroed private copy
    pub fn new(ring: Arc<GuardedRing<N>>, waiter: SignalWaiter) -> Self {
        Self {
            ring,
            waiter,
            copy: [0.0; N],
        }
    }

    /// Block until the button signal is raised
    pub async fn wait_for_trigger(&mut self) {
        info!("Now waiting for button press...");
        self.waiter.wait().await;
        info!("Button pressed, logging data...");
    }

    /// Snapshot the ring and emit its statistics.
    ///
    /// If the ring cannot be acquired in time the previous copy is
    /// summarized instead.
    pub async fn process(&mut self) -> ConsumerReport {
        let freshness = self.ring.snapshot_into(&mut self.copy).await;
        let stats = StatisticsSnapshot::compute(&self.copy);

        let label = match freshness {
            SnapshotOutcome::Fresh => "fresh",
            SnapshotOutcome::Stale => "stale",
        };
        info!(
            min = stats.min,
            max = stats.max,
            avg = stats.mean,
            std_dev = stats.std_dev,
            "Logging data complete ({} snapshot): {}",
            label,
            stats
        );

        ConsumerReport { stats, freshness }
    }

    /// Serve button presses forever
    pub async fn run(mut self) {
        info!(
            "Consumer started: ring capacity={}, access_timeout={}ms",
            self.ring.capacity(),
            self.ring.access_timeout().as_millis()
        );
        loop {
            self.wait_for_trigger().await;
            self.process().await;
        }
    }
}
