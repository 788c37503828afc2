//! Simulation plugin - self-contained plugin pattern
//!
//! This plugin contains the whole simulation core: the mutation gateway,
//! the sub-stepped integrator, trajectory recording, and the simulated
//! clock. One `Update` pass is one macro tick; the gateway set always runs
//! so edits land while stopped, while the physics sets require
//! `AppState::Running`.

use crate::prelude::*;

mod gateway;
mod physics;

use gateway::apply_pending_commands;
use physics::{advance_clock, integrate_motions, record_trajectories};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    ApplyCommands,
    IntegrateMotions,
    RecordTrajectories,
    AdvanceClock,
}

pub struct SimulationPlugin {
    config: SimulationConfig,
}

impl SimulationPlugin {
    /// Build the plugin from the user's configuration file, if any.
    pub fn new() -> Self {
        Self {
            config: SimulationConfig::load_from_user_config(),
        }
    }

    /// Build the plugin from an explicit configuration.
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = sanitize(self.config.clone());

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                info!("=== Current Configuration (TOML) ===\n{}", toml_string);
                info!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        let integrator: Box<dyn Integrator> = match config.physics.integrator {
            IntegratorType::SemiImplicitEuler => Box::new(SemiImplicitEuler),
            IntegratorType::ExplicitEuler => Box::new(ExplicitEuler),
        };

        app.insert_resource(GravitationalConstant {
            base: config.physics.gravitational_constant_base,
            exponent: config.physics.gravitational_constant_exponent,
        });
        app.insert_resource(SubstepCount(config.physics.substeps));
        app.insert_resource(TrajectoryCapacity(config.trajectories.capacity));
        app.insert_resource(SimulationClock::with_scale(
            config.time.factor,
            config.time.multiplier,
        ));
        app.insert_resource(CurrentIntegrator(integrator));
        app.init_resource::<BodyRegistry>();
        app.init_resource::<SimulationBaseline>();
        app.insert_resource(config);

        app.init_state::<AppState>();
        app.add_event::<SimulationCommand>();

        app.configure_sets(
            Update,
            (
                SimulationSet::ApplyCommands,
                SimulationSet::IntegrateMotions,
                SimulationSet::RecordTrajectories,
                SimulationSet::AdvanceClock,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                apply_pending_commands.in_set(SimulationSet::ApplyCommands),
                integrate_motions
                    .in_set(SimulationSet::IntegrateMotions)
                    .run_if(in_state(AppState::Running)),
                record_trajectories
                    .in_set(SimulationSet::RecordTrajectories)
                    .run_if(in_state(AppState::Running)),
                advance_clock
                    .in_set(SimulationSet::AdvanceClock)
                    .run_if(in_state(AppState::Running)),
            ),
        );
    }
}

/// A config file is outside the gateway's validation path, so out-of-range
/// values are coerced back to defaults here instead of poisoning the tick
/// loop invariants.
fn sanitize(mut config: SimulationConfig) -> SimulationConfig {
    let defaults = SimulationConfig::default();

    if config.physics.substeps == 0 {
        warn!("configured substeps must be positive; using 1");
        config.physics.substeps = defaults.physics.substeps;
    }
    if config.trajectories.capacity == 0 {
        warn!("configured trajectory capacity must be positive; using 128");
        config.trajectories.capacity = defaults.trajectories.capacity;
    }
    if !config.physics.gravitational_constant_base.is_finite() {
        warn!("configured gravitational constant base is not finite; using default");
        config.physics.gravitational_constant_base = defaults.physics.gravitational_constant_base;
        config.physics.gravitational_constant_exponent =
            defaults.physics.gravitational_constant_exponent;
    }
    if !config.time.factor.is_finite() || config.time.factor <= 0.0 {
        warn!("configured time factor must be finite and positive; using 1");
        config.time.factor = defaults.time.factor;
    }
    if !config.time.multiplier.is_finite() || config.time.multiplier <= 0.0 {
        warn!("configured time multiplier must be finite and positive; using 1");
        config.time.multiplier = defaults.time.multiplier;
    }

    config
}
