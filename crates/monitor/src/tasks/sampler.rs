//! Periodic Lux Sampler

use ring_buffer::{GuardedRing, WriteOutcome};
use sensor_input::{LuxConverter, SampleSource};
use std::sync::Arc;
use std::time::Duration;
use task_scheduler::{PeriodicDeadline, TaskPriority};
use tracing::{debug, info};

/// Samples the light sensor on a fixed period and stores lux readings.
///
/// The sole writer of the shared ring. A write that cannot get ring access
/// within the bound is dropped; the next period is the retry.
pub struct SamplerTask<S, const N: usize> {
    source: S,
    converter: LuxConverter,
    ring: Arc<GuardedRing<N>>,
    period: Duration,
    stored: u64,
    dropped: u64,
}

impl<S: SampleSource, const N: usize> SamplerTask<S, N> {
    /// Scheduling priority of the sampling path
    pub const PRIORITY: TaskPriority = TaskPriority::Sampling;

    /// Create a sampler writing into `ring`
    pub fn new(source: S, converter: LuxConverter, ring: Arc<GuardedRing<N>>, period: Duration) -> Self {
        Self {
            source,
            converter,
            ring,
            period,
            stored: 0,
            dropped: 0,
        }
    }

    /// Take one reading, convert it and write it to the ring
    pub async fn sample_once(&mut self) -> WriteOutcome {
        let raw = self.source.read_raw();
        let lux = self.converter.convert(raw);

        let outcome = self.ring.write(lux).await;
        match outcome {
            WriteOutcome::Stored => {
                self.stored += 1;
                info!("New lux reading: {:.2} (raw={})", lux, raw);
            }
            WriteOutcome::Dropped => {
                self.dropped += 1;
                debug!("{} samples dropped so far", self.dropped);
            }
        }
        outcome
    }

    /// Sample forever on absolute deadlines
    pub async fn run(mut self) {
        let mut deadline = PeriodicDeadline::new(self.period);
        info!(
            "Sampler started: period={}ms, ring capacity={}, access_timeout={}ms",
            deadline.period().as_millis(),
            self.ring.capacity(),
            self.ring.access_timeout().as_millis()
        );

        loop {
            self.sample_once().await;
            deadline.wait().await;
        }
    }

    /// Get the number of stored samples
    pub fn stored(&self) -> u64 {
        self.stored
    }

    /// Get the number of dropped samples
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
