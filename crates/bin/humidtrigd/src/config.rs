//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `humidtrig.toml` in the working directory (override the path
//! with `HUMIDTRIG_CONFIG`). When no file exists the daemon falls back to a
//! built-in demo layout; when a file exists, the sensor pair is required
//! and a missing key fails the startup instead of running half-configured.
//!
//! ```toml
//! [logging]
//! filter = "humidtrigd=info,humidtrig=info"
//!
//! [sensors]
//! humidity = "sensor.bathroom_humidity"
//! temperature = "sensor.bathroom_temperature"
//!
//! [[switches]]
//! entity = "switch.bathroom_fan"
//! min_temp = 5.0
//!
//! [switches.lt]
//! value = 45.0
//! state = "off"
//!
//! [switches.gt]
//! value = 60.0
//! state = "on"
//! ```

use serde::Deserialize;

use humidtrig_app::config::{SensorsConfig, TriggerConfig};
use humidtrig_domain::rule::SwitchRule;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Sensors and switch rules handed to the trigger engine.
    #[serde(flatten)]
    pub trigger: TriggerConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "humidtrigd=info,humidtrig=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `humidtrig.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, misses a
    /// required key, or fails semantic validation.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("HUMIDTRIG_CONFIG").unwrap_or_else(|_| "humidtrig.toml".to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::demo()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Built-in layout used when no configuration file exists: one fan on
    /// the default thresholds, fed by the simulated bathroom sensors.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            logging: LoggingConfig::default(),
            trigger: TriggerConfig {
                sensors: SensorsConfig {
                    humidity: "sensor.bathroom_humidity".into(),
                    temperature: "sensor.bathroom_temperature".into(),
                },
                switches: vec![SwitchRule::with_defaults("switch.bathroom_fan")],
            },
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HUMIDTRIG_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.trigger
            .validate()
            .map_err(|err| ConfigError::Validation(err.to_string()))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure (including missing required keys).
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use humidtrig_domain::id::SensorId;
    use humidtrig_domain::rule::DEFAULT_MIN_TEMP;
    use humidtrig_domain::switch::SwitchState;

    #[test]
    fn should_provide_demo_layout_as_default() {
        let config = Config::demo();
        assert_eq!(
            config.trigger.sensors.humidity,
            SensorId::new("sensor.bathroom_humidity")
        );
        assert_eq!(config.trigger.switches.len(), 1);
        assert_eq!(config.logging.filter, "humidtrigd=info,humidtrig=info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_full_toml() {
        let config: Config = toml::from_str(
            "
            [logging]
            filter = 'debug'

            [sensors]
            humidity = 'sensor.cellar_humidity'
            temperature = 'sensor.cellar_temperature'

            [[switches]]
            entity = 'switch.cellar_dehumidifier'
            min_temp = 8.0

            [switches.gt]
            value = 65.0
            state = 'on'
            ",
        )
        .unwrap();

        assert_eq!(config.logging.filter, "debug");
        assert_eq!(
            config.trigger.sensors.temperature,
            SensorId::new("sensor.cellar_temperature")
        );
        assert_eq!(config.trigger.switches[0].min_temp, 8.0);
        assert_eq!(config.trigger.switches[0].gt.value, 65.0);
    }

    #[test]
    fn should_use_logging_default_when_section_missing() {
        let config: Config = toml::from_str(
            "
            [sensors]
            humidity = 'sensor.h'
            temperature = 'sensor.t'
            ",
        )
        .unwrap();
        assert_eq!(config.logging.filter, "humidtrigd=info,humidtrig=info");
    }

    #[test]
    fn should_fail_to_parse_when_sensors_missing() {
        let result: Result<Config, _> = toml::from_str(
            "
            [[switches]]
            entity = 'switch.fan'
            ",
        );
        assert!(result.is_err());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_empty_switch_entity() {
        let config: Config = toml::from_str(
            "
            [sensors]
            humidity = 'sensor.h'
            temperature = 'sensor.t'

            [[switches]]
            entity = ''
            ",
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_apply_switch_rule_defaults_from_partial_toml() {
        let config: Config = toml::from_str(
            "
            [sensors]
            humidity = 'sensor.h'
            temperature = 'sensor.t'

            [[switches]]
            entity = 'switch.fan'

            [switches.lt]
            value = 40.0
            ",
        )
        .unwrap();
        let rule = &config.trigger.switches[0];
        assert_eq!(rule.min_temp, DEFAULT_MIN_TEMP);
        assert_eq!(rule.lt.value, 40.0);
        assert_eq!(rule.lt.state, SwitchState::Off);
        assert_eq!(rule.gt.state, SwitchState::On);
    }
}
