//! Simulated devices — settable sensors and commandable switches.

use std::sync::Mutex;

use humidtrig_domain::switch::SwitchState;

/// A simulated sensor holding an optional numeric reading.
///
/// `None` models an unavailable sensor, exactly as the read port reports it.
#[derive(Debug, Default)]
pub struct VirtualSensor {
    value: Mutex<Option<f64>>,
}

impl VirtualSensor {
    /// Sensor that starts out with a known reading.
    #[must_use]
    pub fn with_value(value: f64) -> Self {
        Self {
            value: Mutex::new(Some(value)),
        }
    }

    /// Current reading.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.value
            .lock()
            .map_or_else(|poisoned| *poisoned.into_inner(), |guard| *guard)
    }

    /// Replace the reading; `None` marks the sensor unavailable.
    pub fn set_value(&self, value: Option<f64>) {
        let mut guard = self
            .value
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = value;
    }
}

/// A simulated switch remembering the last commanded state.
#[derive(Debug)]
pub struct VirtualSwitch {
    state: Mutex<SwitchState>,
}

impl Default for VirtualSwitch {
    fn default() -> Self {
        Self {
            state: Mutex::new(SwitchState::Off),
        }
    }
}

impl VirtualSwitch {
    /// Current state.
    #[must_use]
    pub fn state(&self) -> SwitchState {
        self.state
            .lock()
            .map_or_else(|poisoned| *poisoned.into_inner(), |guard| *guard)
    }

    /// Apply a commanded state. Re-applying the current state is a no-op,
    /// which is exactly the idempotence the actuation port promises.
    pub fn apply(&self, state: SwitchState) {
        let mut guard = self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = state;
    }
}
