//! # humidtrigd — humidity trigger daemon
//!
//! Composition root that wires the simulated host platform to the trigger
//! engine and runs until interrupted.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialise tracing
//! - Construct the virtual home (sensors and switches from config)
//! - Construct the trigger engine, injecting adapters via port traits
//! - Run the initial evaluation, then react to sensor-change events
//! - Handle graceful shutdown (ctrl-c)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

use humidtrig_adapter_virtual::VirtualHome;
use humidtrig_adapter_virtual::simulation::Simulation;
use humidtrig_app::event_bus::InProcessEventBus;
use humidtrig_app::trigger_engine::TriggerEngine;

use crate::config::Config;

const EVENT_BUS_CAPACITY: usize = 256;
const SIMULATION_PERIOD: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let trigger = config.trigger;
    tracing::info!(
        humidity = %trigger.sensors.humidity,
        temperature = %trigger.sensors.temperature,
        switches = trigger.switches.len(),
        "humidtrigd starting"
    );

    let bus = Arc::new(InProcessEventBus::new(EVENT_BUS_CAPACITY));

    let mut home = VirtualHome::default()
        .with_bus(Arc::clone(&bus))
        .with_sensor(trigger.sensors.humidity.clone(), None)
        .with_sensor(trigger.sensors.temperature.clone(), None);
    for rule in &trigger.switches {
        home = home.with_switch(rule.entity.clone());
    }
    let home = Arc::new(home);

    let engine = TriggerEngine::new(
        trigger.clone(),
        Arc::clone(&home),
        Arc::clone(&home),
        Arc::clone(&bus),
    );

    let mut events = bus.subscribe();

    // Initial evaluation before any event arrives. With the virtual home
    // both sensors start unavailable, so this logs the degraded path.
    engine.check_now().await;

    let mut simulation = Simulation::start(
        Arc::clone(&home),
        trigger.sensors.humidity.clone(),
        trigger.sensors.temperature.clone(),
        SIMULATION_PERIOD,
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
            event = events.recv() => match event {
                Ok(event) => {
                    engine.handle_event(&event).await;
                }
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "event bus lagged, running a full check");
                    engine.check_now().await;
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    simulation.stop();
    Ok(())
}
