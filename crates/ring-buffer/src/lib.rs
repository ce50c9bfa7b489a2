//! Guarded Sample Ring
//!
//! Provides the fixed-capacity ring of calibrated samples shared between the
//! sampler and the consumer, and the bounded-wait guard that serializes every
//! access to it.

mod buffer;
mod error;
mod guarded;

pub use buffer::SampleRing;
pub use error::RingError;
pub use guarded::{GuardedRing, RingAccess, SnapshotOutcome, WriteOutcome};

/// Capacity of the node's sample ring (10 s of history at 5 Hz)
pub const BUFFER_SIZE: usize = 50;
