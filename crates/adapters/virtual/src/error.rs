//! Virtual adapter error types.

use humidtrig_domain::error::HumidTrigError;

/// Errors specific to the virtual host adapter.
#[derive(Debug, thiserror::Error)]
pub enum VirtualError {
    /// No switch with the given id exists in this home.
    #[error("unknown switch: {0}")]
    UnknownSwitch(String),
}

impl From<VirtualError> for HumidTrigError {
    fn from(err: VirtualError) -> Self {
        Self::Actuation(Box::new(err))
    }
}
