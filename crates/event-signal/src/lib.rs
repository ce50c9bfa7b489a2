//! Interrupt-to-Task Signalling
//!
//! A binary wake signal raised from interrupt-equivalent context and awaited
//! by exactly one task, plus the falling-edge detector that raises it.

mod edge;
mod signal;

pub use edge::FallingEdgeDetector;
pub use signal::{EventSignal, SignalSender, SignalWaiter};
