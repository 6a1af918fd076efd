//! Switch state — the two-valued target state of a controllable switch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target state for a switch actuation.
///
/// This is a closed enum on purpose: a misspelled state in configuration is
/// rejected at parse time instead of surfacing as a runtime warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchState {
    /// The switch should be conducting.
    On,
    /// The switch should be idle.
    Off,
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}
