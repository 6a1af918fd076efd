//! Actuation port — "set switch X to state S".

use std::future::Future;

use humidtrig_domain::error::HumidTrigError;
use humidtrig_domain::id::SwitchId;
use humidtrig_domain::switch::SwitchState;

/// Commands switches on the host platform.
///
/// Actuation must be idempotent: commanding a switch into the state it is
/// already in is a harmless no-op. The engine never reads the result back
/// beyond logging failures — redundant-write suppression and retries are
/// the host's concern.
pub trait SwitchActuator {
    /// Set `switch` to `state`.
    fn set_state(
        &self,
        switch: &SwitchId,
        state: SwitchState,
    ) -> impl Future<Output = Result<(), HumidTrigError>> + Send;
}

impl<T: SwitchActuator + Send + Sync> SwitchActuator for std::sync::Arc<T> {
    fn set_state(
        &self,
        switch: &SwitchId,
        state: SwitchState,
    ) -> impl Future<Output = Result<(), HumidTrigError>> + Send {
        (**self).set_state(switch, state)
    }
}
