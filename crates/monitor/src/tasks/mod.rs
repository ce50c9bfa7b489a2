//! Node Tasks
//!
//! Process-lifetime tasks, from highest to lowest priority:
//! consumer (button-triggered statistics), sampler, status and heartbeat.

mod consumer;
mod heartbeat;
mod sampler;
mod status;

pub use consumer::{ConsumerReport, ConsumerTask};
pub use heartbeat::{HeartbeatTask, IndicatorLed, LogLed};
pub use sampler::SamplerTask;
pub use status::StatusTask;
