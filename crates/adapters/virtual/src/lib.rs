//! # humidtrig-adapter-virtual
//!
//! Simulated host platform for demos and tests: named sensors that can be
//! driven programmatically and switches that remember the last commanded
//! state. Implements the `SensorReader` and `SwitchActuator` ports so the
//! trigger engine runs against it unchanged.
//!
//! ## Dependency rule
//!
//! Depends on `humidtrig-app` (port traits) and `humidtrig-domain` only.

mod devices;
mod error;
pub mod simulation;

pub use devices::{VirtualSensor, VirtualSwitch};
pub use error::VirtualError;

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use humidtrig_app::event_bus::InProcessEventBus;
use humidtrig_app::ports::{EventPublisher, SensorReader, SwitchActuator};
use humidtrig_domain::error::HumidTrigError;
use humidtrig_domain::event::Event;
use humidtrig_domain::id::{SensorId, SwitchId};
use humidtrig_domain::switch::SwitchState;

/// Simulated home: a set of named sensors and switches.
///
/// Reading an unknown sensor yields the unavailable sentinel (`Ok(None)`),
/// mirroring a platform that has not seen the entity yet; commanding an
/// unknown switch is an actuation error.
#[derive(Default)]
pub struct VirtualHome {
    sensors: HashMap<SensorId, VirtualSensor>,
    switches: HashMap<SwitchId, VirtualSwitch>,
    bus: Option<Arc<InProcessEventBus>>,
}

impl VirtualHome {
    /// Add a sensor with an initial reading (`None` = unavailable).
    #[must_use]
    pub fn with_sensor(mut self, id: impl Into<SensorId>, initial: Option<f64>) -> Self {
        let sensor = match initial {
            Some(value) => VirtualSensor::with_value(value),
            None => VirtualSensor::default(),
        };
        self.sensors.insert(id.into(), sensor);
        self
    }

    /// Add a switch, initially off.
    #[must_use]
    pub fn with_switch(mut self, id: impl Into<SwitchId>) -> Self {
        self.switches.insert(id.into(), VirtualSwitch::default());
        self
    }

    /// Attach an event bus; sensor updates will publish `SensorChanged`.
    #[must_use]
    pub fn with_bus(mut self, bus: Arc<InProcessEventBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Drive a sensor to a new value and publish a `SensorChanged` event
    /// when a bus is attached. Unknown sensor ids are ignored with a log.
    pub async fn set_sensor(&self, id: &SensorId, value: Option<f64>) {
        let Some(sensor) = self.sensors.get(id) else {
            tracing::warn!(sensor = %id, "ignoring update for unknown virtual sensor");
            return;
        };
        sensor.set_value(value);
        if let Some(bus) = &self.bus {
            let _ = bus.publish(Event::sensor_changed(id.clone(), value)).await;
        }
    }

    /// Current state of a switch, for inspection in demos and tests.
    #[must_use]
    pub fn switch_state(&self, id: &SwitchId) -> Option<SwitchState> {
        self.switches.get(id).map(VirtualSwitch::state)
    }
}

impl SensorReader for VirtualHome {
    fn read(
        &self,
        sensor: &SensorId,
    ) -> impl Future<Output = Result<Option<f64>, HumidTrigError>> + Send {
        let value = self.sensors.get(sensor).and_then(VirtualSensor::value);
        async move { Ok(value) }
    }
}

impl SwitchActuator for VirtualHome {
    fn set_state(
        &self,
        switch: &SwitchId,
        state: SwitchState,
    ) -> impl Future<Output = Result<(), HumidTrigError>> + Send {
        let result = match self.switches.get(switch) {
            Some(device) => {
                device.apply(state);
                tracing::debug!(switch = %switch, state = %state, "virtual switch commanded");
                Ok(())
            }
            None => Err(VirtualError::UnknownSwitch(switch.to_string()).into()),
        };
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use humidtrig_domain::event::EventType;

    fn home() -> VirtualHome {
        VirtualHome::default()
            .with_sensor("sensor.bathroom_humidity", Some(50.0))
            .with_switch("switch.bathroom_fan")
    }

    #[tokio::test]
    async fn should_read_sensor_value() {
        let home = home();
        let value = home
            .read(&SensorId::new("sensor.bathroom_humidity"))
            .await
            .unwrap();
        assert_eq!(value, Some(50.0));
    }

    #[tokio::test]
    async fn should_report_unknown_sensor_as_unavailable() {
        let home = home();
        let value = home.read(&SensorId::new("sensor.nope")).await.unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn should_apply_switch_command() {
        let home = home();
        let id = SwitchId::new("switch.bathroom_fan");
        home.set_state(&id, SwitchState::On).await.unwrap();
        assert_eq!(home.switch_state(&id), Some(SwitchState::On));
    }

    #[tokio::test]
    async fn should_fail_to_command_unknown_switch() {
        let home = home();
        let result = home
            .set_state(&SwitchId::new("switch.nope"), SwitchState::On)
            .await;
        assert!(matches!(result, Err(HumidTrigError::Actuation(_))));
    }

    #[tokio::test]
    async fn should_publish_sensor_changed_when_bus_attached() {
        let bus = Arc::new(InProcessEventBus::new(16));
        let home = home().with_bus(Arc::clone(&bus));
        let mut rx = bus.subscribe();

        let id = SensorId::new("sensor.bathroom_humidity");
        home.set_sensor(&id, Some(61.0)).await;

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type, EventType::SensorChanged);
        assert_eq!(event.sensor, Some(id.clone()));
        assert_eq!(event.data["value"], 61.0);
        assert_eq!(home.read(&id).await.unwrap(), Some(61.0));
    }

    #[tokio::test]
    async fn should_ignore_updates_for_unknown_sensor() {
        let bus = Arc::new(InProcessEventBus::new(16));
        let home = home().with_bus(Arc::clone(&bus));
        let mut rx = bus.subscribe();

        home.set_sensor(&SensorId::new("sensor.nope"), Some(1.0)).await;

        assert!(rx.try_recv().is_err());
    }
}
