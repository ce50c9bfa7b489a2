//! Task Priority Levels

use std::fmt;

/// Fixed task priority (higher = more important)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TaskPriority {
    /// Liveness and status telemetry
    Idle = 1,
    /// Periodic sensor sampling
    Sampling = 2,
    /// Response to an external event (button)
    Response = 3,
}

impl TaskPriority {
    /// Get the numeric level
    pub fn level(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskPriority::Idle => "idle",
            TaskPriority::Sampling => "sampling",
            TaskPriority::Response => "response",
        };
        write!(f, "{}({})", name, self.level())
    }
}
