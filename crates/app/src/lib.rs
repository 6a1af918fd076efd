//! # humidtrig-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** the host platform implements (driven/outbound ports):
//!   - `SensorReader` — read the current value of a sensor
//!   - `SwitchActuator` — command a switch to a target state
//!   - `EventPublisher` — publish events to interested subscribers
//! - Provide the **trigger engine** that reacts to sensor-change events by
//!   running the threshold evaluator and actuating the resulting decisions
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Hold the validated trigger configuration
//!
//! ## Dependency rule
//! Depends on `humidtrig-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod event_bus;
pub mod ports;
pub mod trigger_engine;
