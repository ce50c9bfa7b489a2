//! LDR Illuminance Calibration

use crate::ADC_MAX_RAW;
use serde::{Deserialize, Serialize};

/// Saturation value for readings the divider cannot resolve (direct sunlight)
pub const MAX_LUX: f64 = 100_000.0;

/// Power-law calibration for an LDR on the low side of a voltage divider.
///
/// `V = raw / 4096 * vref`, `R = series * V / (vref - V)`,
/// `lux = (rl10 * 10^gamma / R)^(1 / gamma)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuxConverter {
    /// ADC reference voltage (V)
    pub vref: f64,
    /// Fixed divider resistor (Ω)
    pub series_ohms: f64,
    /// LDR resistance at 10 lux (Ω)
    pub rl10_ohms: f64,
    /// LDR gamma (slope of log R vs log lux)
    pub gamma: f64,
}

impl Default for LuxConverter {
    fn default() -> Self {
        Self {
            vref: 3.3,
            series_ohms: 10_000.0,
            rl10_ohms: 50_000.0,
            gamma: 0.7,
        }
    }
}

impl LuxConverter {
    /// Convert a raw ADC reading to lux
    pub fn convert(&self, raw: u16) -> f64 {
        self.lux_at(self.resistance(raw))
    }

    /// LDR resistance implied by a raw reading (Ω)
    pub fn resistance(&self, raw: u16) -> f64 {
        let raw = raw.min(ADC_MAX_RAW);
        let volts = f64::from(raw) / 4096.0 * self.vref;
        self.series_ohms * volts / (self.vref - volts)
    }

    /// Illuminance for a given LDR resistance; saturates at `MAX_LUX`
    pub fn lux_at(&self, resistance_ohms: f64) -> f64 {
        if resistance_ohms.is_nan() || resistance_ohms <= 0.0 {
            return MAX_LUX;
        }
        let lux = (self.rl10_ohms * 10f64.powf(self.gamma) / resistance_ohms).powf(1.0 / self.gamma);
        lux.min(MAX_LUX)
    }
}
