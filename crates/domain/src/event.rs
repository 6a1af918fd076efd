//! Event — an immutable record of something that happened.
//!
//! Events are produced when a sensor reports a new value and when the
//! engine commands a switch. They carry a free-form JSON payload so the
//! host platform can attach whatever detail it has.

use serde::{Deserialize, Serialize};

use crate::id::{EventId, SensorId};
use crate::time::{Timestamp, now};

/// The kinds of events the system produces and consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    /// A sensor reported a new value (or became unavailable).
    SensorChanged,
    /// The engine commanded a switch to a target state.
    SwitchCommanded,
}

/// An immutable event record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique id of this occurrence.
    pub id: EventId,
    /// What happened.
    pub event_type: EventType,
    /// Sensor the event concerns, when applicable.
    pub sensor: Option<SensorId>,
    /// Free-form payload (new reading, commanded state, …).
    pub data: serde_json::Value,
    /// When it happened.
    pub timestamp: Timestamp,
}

impl Event {
    /// Create a new event stamped with the current time.
    #[must_use]
    pub fn new(event_type: EventType, sensor: Option<SensorId>, data: serde_json::Value) -> Self {
        Self {
            id: EventId::new(),
            event_type,
            sensor,
            data,
            timestamp: now(),
        }
    }

    /// A `SensorChanged` event carrying the sensor's new reading.
    ///
    /// `None` marks the sensor unavailable.
    #[must_use]
    pub fn sensor_changed(sensor: SensorId, value: Option<f64>) -> Self {
        Self::new(
            EventType::SensorChanged,
            Some(sensor),
            serde_json::json!({ "value": value }),
        )
    }
}
