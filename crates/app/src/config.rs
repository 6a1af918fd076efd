//! Trigger configuration — the sensors to watch and the switches to control.

use serde::{Deserialize, Serialize};

use humidtrig_domain::error::ValidationError;
use humidtrig_domain::id::SensorId;
use humidtrig_domain::rule::SwitchRule;

/// The sensor pair every evaluation reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorsConfig {
    /// Humidity sensor entity id.
    pub humidity: SensorId,
    /// Temperature sensor entity id.
    pub temperature: SensorId,
}

/// Validated configuration handed to the trigger engine.
///
/// Loaded once at startup and never mutated afterwards; the engine borrows
/// it for every evaluation. Both sensor ids are required — a configuration
/// without them fails at parse time, before any evaluation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Sensors feeding the evaluator.
    pub sensors: SensorsConfig,
    /// Switch rules, evaluated in declaration order.
    #[serde(default)]
    pub switches: Vec<SwitchRule>,
}

impl TriggerConfig {
    /// Check domain invariants across the whole configuration.
    ///
    /// An inverted hysteresis band (`lt.value > gt.value`) is *not*
    /// rejected — evaluation is defined for it, non-flapping behaviour just
    /// isn't guaranteed — so it only produces a warning here.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: an empty sensor id or an empty
    /// switch entity id.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sensors.humidity.is_empty() || self.sensors.temperature.is_empty() {
            return Err(ValidationError::EmptySensorId);
        }
        for rule in &self.switches {
            rule.validate()?;
            if rule.band_is_inverted() {
                tracing::warn!(
                    entity = %rule.entity,
                    lt = rule.lt.value,
                    gt = rule.gt.value,
                    "low threshold above high threshold, hysteresis band is inverted"
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use humidtrig_domain::rule::{DEFAULT_GT_VALUE, DEFAULT_LT_VALUE, DEFAULT_MIN_TEMP};
    use humidtrig_domain::switch::SwitchState;

    #[test]
    fn should_parse_full_config_from_toml() {
        let config: TriggerConfig = toml::from_str(
            "
            [sensors]
            humidity = 'sensor.bathroom_humidity'
            temperature = 'sensor.bathroom_temperature'

            [[switches]]
            entity = 'switch.bathroom_fan'

            [[switches]]
            entity = 'switch.cellar_dehumidifier'
            min_temp = 8.0

            [switches.gt]
            value = 65.0
            ",
        )
        .unwrap();

        assert_eq!(
            config.sensors.humidity,
            SensorId::new("sensor.bathroom_humidity")
        );
        assert_eq!(config.switches.len(), 2);
        assert_eq!(config.switches[0].min_temp, DEFAULT_MIN_TEMP);
        assert_eq!(config.switches[1].min_temp, 8.0);
        assert_eq!(config.switches[1].gt.value, 65.0);
        assert_eq!(config.switches[1].gt.state, SwitchState::On);
        assert_eq!(config.switches[1].lt.value, DEFAULT_LT_VALUE);
    }

    #[test]
    fn should_default_to_empty_switch_list() {
        let config: TriggerConfig = toml::from_str(
            "
            [sensors]
            humidity = 'sensor.h'
            temperature = 'sensor.t'
            ",
        )
        .unwrap();
        assert!(config.switches.is_empty());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn should_fail_to_parse_without_sensors() {
        let result: Result<TriggerConfig, _> = toml::from_str(
            "
            [[switches]]
            entity = 'switch.fan'
            ",
        );
        assert!(result.is_err());
    }

    #[test]
    fn should_fail_to_parse_with_partial_sensor_pair() {
        let result: Result<TriggerConfig, _> = toml::from_str(
            "
            [sensors]
            humidity = 'sensor.h'
            ",
        );
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_empty_sensor_id_on_validate() {
        let config: TriggerConfig = toml::from_str(
            "
            [sensors]
            humidity = ''
            temperature = 'sensor.t'
            ",
        )
        .unwrap();
        assert_eq!(config.validate(), Err(ValidationError::EmptySensorId));
    }

    #[test]
    fn should_reject_empty_switch_entity_on_validate() {
        let config: TriggerConfig = toml::from_str(
            "
            [sensors]
            humidity = 'sensor.h'
            temperature = 'sensor.t'

            [[switches]]
            entity = ''
            ",
        )
        .unwrap();
        assert_eq!(config.validate(), Err(ValidationError::EmptySwitchId));
    }

    #[test]
    fn should_accept_inverted_band_with_warning_only() {
        let config: TriggerConfig = toml::from_str(
            "
            [sensors]
            humidity = 'sensor.h'
            temperature = 'sensor.t'

            [[switches]]
            entity = 'switch.fan'

            [switches.lt]
            value = 70.0

            [switches.gt]
            value = 50.0
            ",
        )
        .unwrap();
        assert!(config.switches[0].band_is_inverted());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn should_match_defaults_for_rule_with_only_entity() {
        let config: TriggerConfig = toml::from_str(
            "
            [sensors]
            humidity = 'sensor.h'
            temperature = 'sensor.t'

            [[switches]]
            entity = 'switch.fan'
            ",
        )
        .unwrap();
        let rule = &config.switches[0];
        assert_eq!(rule.min_temp, DEFAULT_MIN_TEMP);
        assert_eq!(rule.lt.value, DEFAULT_LT_VALUE);
        assert_eq!(rule.lt.state, SwitchState::Off);
        assert_eq!(rule.gt.value, DEFAULT_GT_VALUE);
        assert_eq!(rule.gt.state, SwitchState::On);
    }
}
