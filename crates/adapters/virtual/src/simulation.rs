//! Background sensor drift — keeps the demo alive without real hardware.
//!
//! A single task nudges the humidity reading up and down a triangle wave
//! wide enough to cross the default thresholds in both directions, so a
//! freshly started daemon shows the full actuation cycle in its log.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use humidtrig_domain::id::SensorId;

use crate::VirtualHome;

const HUMIDITY_FLOOR: f64 = 35.0;
const HUMIDITY_CEILING: f64 = 75.0;
const HUMIDITY_STEP: f64 = 2.5;
const ROOM_TEMPERATURE: f64 = 21.0;

/// Handle to the running drift task. Aborts on drop.
pub struct Simulation {
    handle: Option<JoinHandle<()>>,
}

impl Simulation {
    /// Spawn the drift task; the sensors are updated every `period`.
    #[must_use]
    pub fn start(
        home: Arc<VirtualHome>,
        humidity: SensorId,
        temperature: SensorId,
        period: Duration,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            let mut level = HUMIDITY_FLOOR;
            let mut rising = true;

            // First tick completes immediately, seeding both sensors.
            loop {
                ticker.tick().await;
                home.set_sensor(&temperature, Some(ROOM_TEMPERATURE)).await;
                home.set_sensor(&humidity, Some(level)).await;

                if rising {
                    level += HUMIDITY_STEP;
                    if level >= HUMIDITY_CEILING {
                        rising = false;
                    }
                } else {
                    level -= HUMIDITY_STEP;
                    if level <= HUMIDITY_FLOOR {
                        rising = true;
                    }
                }
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Abort the drift task.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("sensor drift task aborted");
        }
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        self.stop();
    }
}
