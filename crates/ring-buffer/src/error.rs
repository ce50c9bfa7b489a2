//! Ring Access Error Types

use thiserror::Error;

/// Errors raised while acquiring the sample ring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// Another holder kept the ring past the wait bound
    #[error("Ring access not acquired within {waited_ms}ms")]
    AccessTimeout { waited_ms: u64 },
}
