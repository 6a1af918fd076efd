//! Threshold evaluation — maps a sensor snapshot onto per-switch decisions.
//!
//! Evaluation is pure: no IO, no state carried between calls. Each rule is
//! evaluated independently, in input order, and the result is always exactly
//! one [`Decision`] per rule.
//!
//! The branch order is load-bearing: the minimum-temperature guard wins over
//! both humidity branches, and both humidity comparisons are strict so that
//! a reading equal to a threshold falls into the dead-band.

use crate::decision::{Decision, HoldReason};
use crate::rule::SwitchRule;
use crate::snapshot::SensorSnapshot;

/// Evaluate a single rule against the snapshot.
///
/// Never fails: unknown readings and guard conditions degrade to
/// [`Decision::NoAction`] with the matching [`HoldReason`].
#[must_use]
pub fn evaluate_rule(rule: &SwitchRule, snapshot: SensorSnapshot) -> Decision {
    let (Some(humidity), Some(temperature)) = (snapshot.humidity, snapshot.temperature) else {
        return Decision::NoAction {
            reason: HoldReason::SensorUnavailable,
        };
    };

    // Safety cutoff first: never operate equipment below its minimum
    // temperature, no matter what the humidity says.
    if temperature < rule.min_temp {
        return Decision::NoAction {
            reason: HoldReason::BelowMinTemp,
        };
    }

    if humidity < rule.lt.value {
        Decision::SetState {
            entity: rule.entity.clone(),
            state: rule.lt.state,
        }
    } else if humidity > rule.gt.value {
        Decision::SetState {
            entity: rule.entity.clone(),
            state: rule.gt.state,
        }
    } else {
        Decision::NoAction {
            reason: HoldReason::InDeadBand,
        }
    }
}

/// Evaluate every rule in order, producing one decision per rule.
///
/// Rules never interact: one rule's thresholds cannot affect another
/// rule's decision.
#[must_use]
pub fn evaluate_all(rules: &[SwitchRule], snapshot: SensorSnapshot) -> Vec<Decision> {
    rules.iter().map(|rule| evaluate_rule(rule, snapshot)).collect()
}
