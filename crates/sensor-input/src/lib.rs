//! Sensor Input
//!
//! Raw 12-bit ADC acquisition and the calibrated transfer function that maps
//! a light-dependent-resistor divider reading to illuminance (lux).

mod lux;
mod source;

pub use lux::{LuxConverter, MAX_LUX};
pub use source::{ReplaySource, SampleSource, SimulatedLdr};

/// Largest raw value a 12-bit ADC returns
pub const ADC_MAX_RAW: u16 = 4095;
