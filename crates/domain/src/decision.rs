//! Decision — the evaluator's output for a single switch rule.

use std::fmt;

use crate::id::SwitchId;
use crate::switch::SwitchState;

/// Why a rule produced no actuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldReason {
    /// Humidity or temperature is unknown.
    SensorUnavailable,
    /// Temperature is below the rule's minimum operating temperature.
    BelowMinTemp,
    /// Humidity sits inside the hysteresis dead-band.
    InDeadBand,
}

impl fmt::Display for HoldReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SensorUnavailable => f.write_str("sensor unavailable"),
            Self::BelowMinTemp => f.write_str("temperature below minimum"),
            Self::InDeadBand => f.write_str("humidity inside dead-band"),
        }
    }
}

/// Outcome of evaluating one [`SwitchRule`](crate::rule::SwitchRule).
///
/// Decisions are produced fresh on every evaluation and handed to the
/// actuation collaborator; nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Command the switch to the given state.
    SetState {
        /// Switch to actuate.
        entity: SwitchId,
        /// State to apply.
        state: SwitchState,
    },
    /// Leave the switch in whatever state it currently has.
    NoAction {
        /// Why the switch is left alone.
        reason: HoldReason,
    },
}

impl Decision {
    /// Whether this decision commands an actuation.
    #[must_use]
    pub fn is_actuation(&self) -> bool {
        matches!(self, Self::SetState { .. })
    }
}
