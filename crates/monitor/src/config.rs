//! Node Configuration

use crate::ConfigError;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use sensor_input::LuxConverter;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

/// Config file read when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "monitor.toml";

/// Prefix for environment overrides (`MONITOR__SAMPLER__PERIOD_MS=100`)
pub const ENV_PREFIX: &str = "MONITOR";

/// Upper bound for every configured duration (one day)
pub const MAX_DURATION_MS: u64 = 24 * 60 * 60 * 1000;

/// Node configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    pub buffer: BufferConfig,
    pub sampler: SamplerConfig,
    pub heartbeat: HeartbeatConfig,
    pub status: StatusConfig,
    pub button: ButtonConfig,
    pub logging: LoggingConfig,
}

/// Shared sample ring settings (capacity is fixed at build time)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Bounded wait for ring access (milliseconds)
    pub access_timeout_ms: u64,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            access_timeout_ms: 100,
        }
    }
}

/// Sampler task settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Sampling period (milliseconds)
    pub period_ms: u64,
    /// Seed for the simulated LDR
    pub seed: u64,
    /// LDR divider calibration
    pub calibration: LuxConverter,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            period_ms: 200,
            seed: 0x5EED,
            calibration: LuxConverter::default(),
        }
    }
}

/// Heartbeat task settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartbeatConfig {
    /// Time the indicator stays in each state (milliseconds)
    pub half_period_ms: u64,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self { half_period_ms: 500 }
    }
}

/// Status task settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Update period (milliseconds)
    pub period_ms: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self { period_ms: 1000 }
    }
}

/// Where button presses come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonMode {
    /// Each line read from stdin is one press
    Stdin,
    /// Simulated press every `period_ms`
    Periodic,
}

/// Button input settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub mode: ButtonMode,
    /// Press interval in periodic mode (milliseconds)
    pub period_ms: u64,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            mode: ButtonMode::Stdin,
            period_ms: 5000,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON lines instead of text
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn max_level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.level)
            .map_err(|_| ConfigError::Invalid(format!("unknown log level '{}'", self.level)))
    }
}

impl NodeConfig {
    /// Load defaults, then the config file (optional), then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        let builder = config::Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );
        Self::from_sources(builder)
    }

    fn from_sources(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: NodeConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the tasks cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("buffer.access_timeout_ms", self.buffer.access_timeout_ms),
            ("sampler.period_ms", self.sampler.period_ms),
            ("heartbeat.half_period_ms", self.heartbeat.half_period_ms),
            ("status.period_ms", self.status.period_ms),
            ("button.period_ms", self.button.period_ms),
        ];
        for (name, ms) in durations {
            if ms == 0 {
                return Err(ConfigError::Invalid(format!("{} must be > 0", name)));
            }
            if ms > MAX_DURATION_MS {
                return Err(ConfigError::Invalid(format!(
                    "{} must be <= {}",
                    name, MAX_DURATION_MS
                )));
            }
        }

        let cal = &self.sampler.calibration;
        let constants = [
            ("sampler.calibration.vref", cal.vref),
            ("sampler.calibration.series_ohms", cal.series_ohms),
            ("sampler.calibration.rl10_ohms", cal.rl10_ohms),
            ("sampler.calibration.gamma", cal.gamma),
        ];
        if let Some((name, _)) = constants.iter().find(|(_, v)| !(v.is_finite() && *v > 0.0)) {
            return Err(ConfigError::Invalid(format!("{} must be a positive number", name)));
        }

        self.logging.max_level()?;
        Ok(())
    }

    /// Bounded wait for ring access
    pub fn access_timeout(&self) -> Duration {
        Duration::from_millis(self.buffer.access_timeout_ms)
    }

    /// Sampler period
    pub fn sample_period(&self) -> Duration {
        Duration::from_millis(self.sampler.period_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(text: &str) -> Result<NodeConfig, ConfigError> {
        NodeConfig::from_sources(
            config::Config::builder().add_source(File::from_str(text, FileFormat::Toml)),
        )
    }

    #[test]
    fn test_defaults_match_firmware() {
        let config = NodeConfig::default();
        assert_eq!(config.sampler.period_ms, 200);
        assert_eq!(config.buffer.access_timeout_ms, 100);
        assert_eq!(config.heartbeat.half_period_ms, 500);
        assert_eq!(config.status.period_ms, 1000);
        assert_eq!(config.button.mode, ButtonMode::Stdin);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = from_toml(
            r#"
            [sampler]
            period_ms = 50

            [button]
            mode = "periodic"
            "#,
        )
        .unwrap();

        assert_eq!(config.sample_period(), Duration::from_millis(50));
        assert_eq!(config.sampler.seed, 0x5EED);
        assert_eq!(config.button.mode, ButtonMode::Periodic);
        assert_eq!(config.access_timeout(), Duration::from_millis(100));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let config = NodeConfig::load(Some(Path::new("/nonexistent/monitor.toml"))).unwrap();
        assert_eq!(config.status.period_ms, 1000);
    }

    #[test]
    fn test_zero_period_rejected() {
        let err = from_toml("[status]\nperiod_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("status.period_ms")));
    }

    #[test]
    fn test_oversized_period_rejected() {
        let err = from_toml("[sampler]\nperiod_ms = 9223372036854775807").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("sampler.period_ms")));

        let config = from_toml(&format!("[heartbeat]\nhalf_period_ms = {}", MAX_DURATION_MS)).unwrap();
        assert_eq!(config.heartbeat.half_period_ms, MAX_DURATION_MS);
    }

    #[test]
    fn test_calibration_override() {
        let config = from_toml(
            r#"
            [sampler.calibration]
            rl10_ohms = 20000.0
            "#,
        )
        .unwrap();

        let cal = config.sampler.calibration;
        assert_eq!(cal.rl10_ohms, 20_000.0);
        assert_eq!(cal.gamma, 0.7);
        assert_eq!(cal.series_ohms, 10_000.0);
        // R = 20k is this LDR's 10 lux point
        assert!((cal.lux_at(20_000.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_calibration_rejected() {
        let err = from_toml("[sampler.calibration]\ngamma = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("gamma")));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let err = from_toml("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_button_mode_rejected() {
        let err = from_toml("[button]\nmode = \"gpio\"").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
