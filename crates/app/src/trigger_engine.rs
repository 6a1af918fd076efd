//! Trigger engine — reacts to sensor changes by evaluating and actuating.
//!
//! The engine listens for sensor-change events and, for each event that
//! concerns one of its two configured sensors, re-reads **both** sensors
//! (the latest known values, not the event payload) and runs the threshold
//! evaluator over every switch rule. `SetState` decisions are handed to the
//! actuation port; holds are logged and nothing else happens.
//!
//! The engine carries no mutable state: every evaluation is self-contained
//! given the current readings and the immutable configuration, so calls
//! never interact and re-entrancy is never required.

use humidtrig_domain::decision::{Decision, HoldReason};
use humidtrig_domain::evaluator;
use humidtrig_domain::event::{Event, EventType};
use humidtrig_domain::id::SensorId;
use humidtrig_domain::snapshot::SensorSnapshot;

use crate::config::TriggerConfig;
use crate::ports::{EventPublisher, SensorReader, SwitchActuator};

/// Reactive engine driving the threshold evaluator.
pub struct TriggerEngine<S, A, P> {
    config: TriggerConfig,
    sensors: S,
    actuator: A,
    publisher: P,
}

impl<S, A, P> TriggerEngine<S, A, P>
where
    S: SensorReader,
    A: SwitchActuator,
    P: EventPublisher,
{
    /// Create a new engine over the given ports.
    pub fn new(config: TriggerConfig, sensors: S, actuator: A, publisher: P) -> Self {
        Self {
            config,
            sensors,
            actuator,
            publisher,
        }
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    /// Process a single event.
    ///
    /// Events that are not `SensorChanged`, or that concern a sensor other
    /// than the configured humidity/temperature pair, are ignored. Otherwise
    /// this runs a full evaluation over all switch rules and returns the
    /// decisions in rule order.
    pub async fn handle_event(&self, event: &Event) -> Vec<Decision> {
        if event.event_type != EventType::SensorChanged {
            return Vec::new();
        }
        let Some(sensor) = event.sensor.as_ref() else {
            return Vec::new();
        };
        if !self.watches(sensor) {
            tracing::trace!(sensor = %sensor, "ignoring change of unrelated sensor");
            return Vec::new();
        }
        self.check_now().await
    }

    /// Run a full evaluation using the latest known sensor values.
    ///
    /// This is also invoked once at startup, before any event arrives.
    /// `SetState` decisions have already been handed to the actuator by the
    /// time this returns; actuation failures are logged, not propagated —
    /// the next triggering event retries naturally.
    pub async fn check_now(&self) -> Vec<Decision> {
        let snapshot = self.read_snapshot().await;
        if snapshot.humidity.is_none() {
            tracing::warn!(
                sensor = %self.config.sensors.humidity,
                "humidity value unavailable, holding all switches"
            );
        }
        if snapshot.temperature.is_none() {
            tracing::warn!(
                sensor = %self.config.sensors.temperature,
                "temperature value unavailable, holding all switches"
            );
        }

        let decisions = evaluator::evaluate_all(&self.config.switches, snapshot);
        for (rule, decision) in self.config.switches.iter().zip(&decisions) {
            match decision {
                Decision::SetState { entity, state } => {
                    tracing::info!(
                        entity = %entity,
                        state = %state,
                        humidity = snapshot.humidity,
                        temperature = snapshot.temperature,
                        "humidity crossed threshold, commanding switch"
                    );
                    if let Err(err) = self.actuator.set_state(entity, *state).await {
                        tracing::warn!(%err, entity = %entity, "failed to actuate switch");
                        continue;
                    }
                    let commanded = Event::new(
                        EventType::SwitchCommanded,
                        None,
                        serde_json::json!({ "entity": entity, "state": state }),
                    );
                    // Fire-and-forget: subscribers are optional.
                    let _ = self.publisher.publish(commanded).await;
                }
                Decision::NoAction { reason } => match reason {
                    // Already warned above, once per evaluation.
                    HoldReason::SensorUnavailable => {}
                    HoldReason::BelowMinTemp => tracing::debug!(
                        entity = %rule.entity,
                        min_temp = rule.min_temp,
                        temperature = snapshot.temperature,
                        "temperature below minimum, holding switch"
                    ),
                    HoldReason::InDeadBand => tracing::debug!(
                        entity = %rule.entity,
                        humidity = snapshot.humidity,
                        "humidity inside dead-band, holding switch"
                    ),
                },
            }
        }
        decisions
    }

    async fn read_snapshot(&self) -> SensorSnapshot {
        SensorSnapshot {
            humidity: self.read_value(&self.config.sensors.humidity).await,
            temperature: self.read_value(&self.config.sensors.temperature).await,
        }
    }

    async fn read_value(&self, sensor: &SensorId) -> Option<f64> {
        match self.sensors.read(sensor).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, sensor = %sensor, "sensor read failed, treating value as unknown");
                None
            }
        }
    }

    fn watches(&self, sensor: &SensorId) -> bool {
        *sensor == self.config.sensors.humidity || *sensor == self.config.sensors.temperature
    }
}
