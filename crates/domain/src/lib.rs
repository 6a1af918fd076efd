//! # humidtrig-domain
//!
//! Pure domain model for the humidtrig threshold evaluator.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **SwitchRule** (per-switch thresholds, target states, safety cutoff)
//! - Define **SensorSnapshot** (the humidity/temperature readings of one instant)
//! - Define **Decision** (the evaluator's per-rule output)
//! - Define **Events** (sensor-change and switch-command records)
//! - Contain the threshold evaluation logic itself
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod decision;
pub mod error;
pub mod evaluator;
pub mod event;
pub mod id;
pub mod rule;
pub mod snapshot;
pub mod switch;
pub mod time;
