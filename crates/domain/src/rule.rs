//! Switch rule — per-switch thresholds, target states, and safety cutoff.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::SwitchId;
use crate::switch::SwitchState;

/// Temperature below which a switch is never actuated.
pub const DEFAULT_MIN_TEMP: f64 = 5.0;
/// Humidity threshold for the low branch.
pub const DEFAULT_LT_VALUE: f64 = 45.0;
/// Humidity threshold for the high branch.
pub const DEFAULT_GT_VALUE: f64 = 60.0;

/// A humidity threshold paired with the state to apply when it is crossed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    /// Humidity value in percent.
    pub value: f64,
    /// State to command when the threshold is crossed.
    pub state: SwitchState,
}

/// Configuration for one controllable switch.
///
/// Only `entity` is required. The remaining fields default to the values a
/// dehumidifier setup wants: hold below 5°, turn off under 45% humidity,
/// turn on above 60%. Rules are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSwitchRule")]
pub struct SwitchRule {
    /// Host-platform identifier of the switch to actuate.
    pub entity: SwitchId,
    /// Below this temperature no actuation occurs regardless of humidity.
    pub min_temp: f64,
    /// Low threshold: applied when humidity falls below `lt.value`.
    pub lt: Threshold,
    /// High threshold: applied when humidity rises above `gt.value`.
    pub gt: Threshold,
}

/// Wire form of [`SwitchRule`] with every optional key still optional.
///
/// Defaults are applied key-by-key in the `From` conversion, so a rule may
/// override `lt.value` while keeping the default `lt.state`.
#[derive(Debug, Deserialize)]
struct RawSwitchRule {
    entity: SwitchId,
    min_temp: Option<f64>,
    #[serde(default)]
    lt: RawThreshold,
    #[serde(default)]
    gt: RawThreshold,
}

#[derive(Debug, Default, Deserialize)]
struct RawThreshold {
    value: Option<f64>,
    state: Option<SwitchState>,
}

impl From<RawSwitchRule> for SwitchRule {
    fn from(raw: RawSwitchRule) -> Self {
        Self {
            entity: raw.entity,
            min_temp: raw.min_temp.unwrap_or(DEFAULT_MIN_TEMP),
            lt: Threshold {
                value: raw.lt.value.unwrap_or(DEFAULT_LT_VALUE),
                state: raw.lt.state.unwrap_or(SwitchState::Off),
            },
            gt: Threshold {
                value: raw.gt.value.unwrap_or(DEFAULT_GT_VALUE),
                state: raw.gt.state.unwrap_or(SwitchState::On),
            },
        }
    }
}

impl SwitchRule {
    /// Build a rule with all default thresholds for `entity`.
    #[must_use]
    pub fn with_defaults(entity: impl Into<SwitchId>) -> Self {
        Self {
            entity: entity.into(),
            min_temp: DEFAULT_MIN_TEMP,
            lt: Threshold {
                value: DEFAULT_LT_VALUE,
                state: SwitchState::Off,
            },
            gt: Threshold {
                value: DEFAULT_GT_VALUE,
                state: SwitchState::On,
            },
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySwitchId`] when the entity id is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.entity.is_empty() {
            return Err(ValidationError::EmptySwitchId);
        }
        Ok(())
    }

    /// Whether the hysteresis band is inverted (`lt.value > gt.value`).
    ///
    /// An inverted band is accepted, but non-flapping behaviour is only
    /// guaranteed when `lt.value <= gt.value`; the configuration loader
    /// warns when this returns `true`.
    #[must_use]
    pub fn band_is_inverted(&self) -> bool {
        self.lt.value > self.gt.value
    }
}
