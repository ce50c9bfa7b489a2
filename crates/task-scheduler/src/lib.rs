//! Periodic Task Scheduling
//!
//! Provides the absolute-deadline delay used by every periodic task and the
//! fixed priority levels the node assigns to them.

mod priority;
mod scheduler;

pub use priority::TaskPriority;
pub use scheduler::PeriodicDeadline;
