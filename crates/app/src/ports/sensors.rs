//! Sensor read port — "current value of sensor X".

use std::future::Future;

use humidtrig_domain::error::HumidTrigError;
use humidtrig_domain::id::SensorId;

/// Reads the latest known value of a sensor from the host platform.
pub trait SensorReader {
    /// Read the current value of `sensor`.
    ///
    /// `Ok(None)` is the unknown/unavailable sentinel: the sensor exists but
    /// has no usable numeric value right now. Errors are reserved for
    /// transport failures; the engine treats both the same way (no action)
    /// but logs them differently.
    fn read(
        &self,
        sensor: &SensorId,
    ) -> impl Future<Output = Result<Option<f64>, HumidTrigError>> + Send;
}

impl<T: SensorReader + Send + Sync> SensorReader for std::sync::Arc<T> {
    fn read(
        &self,
        sensor: &SensorId,
    ) -> impl Future<Output = Result<Option<f64>, HumidTrigError>> + Send {
        (**self).read(sensor)
    }
}
