//! Bounded-Wait Guarded Access

use crate::{RingError, SampleRing};
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

/// Result of a guarded write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Sample stored at the cursor
    Stored,
    /// Access timed out; the sample was discarded
    Dropped,
}

/// Result of a guarded snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOutcome {
    /// Destination now holds the current ring contents
    Fresh,
    /// Access timed out; destination kept its previous contents
    Stale,
}

/// Scoped access token for the sample ring.
///
/// Holding a `RingAccess` excludes every other holder. Access is released
/// when the token is dropped.
pub struct RingAccess<'a, const N: usize> {
    guard: MutexGuard<'a, SampleRing<N>>,
}

impl<const N: usize> RingAccess<'_, N> {
    /// Store a sample, overwriting the oldest slot if full
    pub fn write(&mut self, value: f64) {
        self.guard.push(value);
    }

    /// Copy the ring contents into `dest`, oldest first
    pub fn copy_into(&self, dest: &mut [f64; N]) {
        self.guard.copy_into(dest);
    }

    /// Get total samples written since construction
    pub fn total_written(&self) -> u64 {
        self.guard.total_written()
    }
}

/// Sample ring behind a mutual-exclusion guard with a bounded wait.
///
/// Neither the writer nor the reader ever blocks indefinitely: acquisition
/// gives up after `access_timeout` and the caller degrades (drops the write
/// or keeps its stale copy).
pub struct GuardedRing<const N: usize> {
    ring: Mutex<SampleRing<N>>,
    access_timeout: Duration,
}

impl<const N: usize> GuardedRing<N> {
    /// Create a zero-filled guarded ring
    pub fn new(access_timeout: Duration) -> Self {
        debug!(
            "Creating guarded ring: capacity={}, access_timeout={}ms",
            N,
            access_timeout.as_millis()
        );
        Self {
            ring: Mutex::new(SampleRing::new()),
            access_timeout,
        }
    }

    /// Acquire exclusive access, waiting at most the configured bound
    pub async fn acquire(&self) -> Result<RingAccess<'_, N>, RingError> {
        match tokio::time::timeout(self.access_timeout, self.ring.lock()).await {
            Ok(guard) => Ok(RingAccess { guard }),
            Err(_) => Err(RingError::AccessTimeout {
                waited_ms: self.access_timeout.as_millis() as u64,
            }),
        }
    }

    /// Store a sample; dropped (not retried) if access times out
    pub async fn write(&self, value: f64) -> WriteOutcome {
        match self.acquire().await {
            Ok(mut access) => {
                access.write(value);
                WriteOutcome::Stored
            }
            Err(e) => {
                warn!("Sample {:.2} dropped: {}", value, e);
                WriteOutcome::Dropped
            }
        }
    }

    /// Copy the ring into caller-owned storage.
    ///
    /// On timeout `dest` is left untouched so the caller keeps serving its
    /// last good copy.
    pub async fn snapshot_into(&self, dest: &mut [f64; N]) -> SnapshotOutcome {
        match self.acquire().await {
            Ok(access) => {
                access.copy_into(dest);
                SnapshotOutcome::Fresh
            }
            Err(e) => {
                warn!("Snapshot reusing previous copy: {}", e);
                SnapshotOutcome::Stale
            }
        }
    }

    /// Get the ring capacity
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Get the acquisition wait bound
    pub fn access_timeout(&self) -> Duration {
        self.access_timeout
    }
}
