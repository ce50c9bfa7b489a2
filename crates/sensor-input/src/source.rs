//! Raw ADC Sample Sources

use crate::ADC_MAX_RAW;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// On-demand source of raw 12-bit ADC readings
pub trait SampleSource: Send {
    /// Take one reading in `[0, 4095]`
    fn read_raw(&mut self) -> u16;
}

/// Simulated LDR divider: slowly drifting light level plus ADC noise
pub struct SimulatedLdr {
    rng: StdRng,
    /// Current noise-free level (counts)
    level: f64,
    /// Drift per reading (counts), sign flips at the band edges
    drift: f64,
    /// Peak noise amplitude (counts)
    noise: i32,
}

impl SimulatedLdr {
    /// Lowest simulated level (bright room)
    const LEVEL_MIN: f64 = 800.0;
    /// Highest simulated level (dusk)
    const LEVEL_MAX: f64 = 3600.0;

    /// Create a simulated source with a fixed seed
    pub fn new(seed: u64) -> Self {
        debug!("Creating simulated LDR source (seed={})", seed);
        Self {
            rng: StdRng::seed_from_u64(seed),
            level: 2048.0,
            drift: 6.0,
            noise: 40,
        }
    }
}

impl SampleSource for SimulatedLdr {
    fn read_raw(&mut self) -> u16 {
        self.level += self.drift;
        if self.level >= Self::LEVEL_MAX || self.level <= Self::LEVEL_MIN {
            self.drift = -self.drift;
        }
        let noisy = self.level + f64::from(self.rng.gen_range(-self.noise..=self.noise));
        noisy.round().clamp(0.0, f64::from(ADC_MAX_RAW)) as u16
    }
}

/// Replays a fixed sequence of readings, wrapping at the end
pub struct ReplaySource {
    readings: Vec<u16>,
    position: usize,
}

impl ReplaySource {
    /// Create a replay source (an empty sequence always reads 0)
    pub fn new(readings: Vec<u16>) -> Self {
        Self {
            readings,
            position: 0,
        }
    }
}

impl SampleSource for ReplaySource {
    fn read_raw(&mut self) -> u16 {
        let Some(&raw) = self.readings.get(self.position) else {
            return 0;
        };
        self.position = (self.position + 1) % self.readings.len();
        raw.min(ADC_MAX_RAW)
    }
}
