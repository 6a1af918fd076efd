//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! Adapters wrap their transport errors in [`HumidTrigError::SensorRead`]
//! or [`HumidTrigError::Actuation`] when crossing a port boundary.

/// Top-level error for humidtrig operations.
///
/// The threshold evaluator itself never fails — it degrades to no action on
/// bad input — so these variants only surface from configuration loading and
/// from the host-platform ports.
#[derive(Debug, thiserror::Error)]
pub enum HumidTrigError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// Reading a sensor through the host platform failed.
    #[error("sensor read failed")]
    SensorRead(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Commanding a switch through the host platform failed.
    #[error("switch actuation failed")]
    Actuation(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Violations of domain invariants, reported at configuration-load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A switch rule has an empty entity identifier.
    #[error("switch entity id must not be empty")]
    EmptySwitchId,

    /// A sensor identifier is empty.
    #[error("sensor id must not be empty")]
    EmptySensorId,
}
