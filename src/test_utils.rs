//! Test utilities for headless plugin testing

use crate::config::SimulationConfig;
use crate::events::SimulationCommand;
use crate::physics::components::{BodyId, Position, SimulationBody, Velocity};
use crate::physics::math::{Scalar, Vector};
use crate::plugins::SimulationPlugin;
use crate::scenario::BodySpec;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

/// Creates a minimal headless app with the simulation core installed.
///
/// Uses the default configuration rather than the user's config file so
/// tests are hermetic.
pub fn create_test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.add_plugins(SimulationPlugin::with_config(SimulationConfig::default()));
    app
}

/// Runs `count` update cycles; each one is a macro tick while running.
pub fn run_ticks(app: &mut App, count: usize) {
    for _ in 0..count {
        app.update();
    }
}

pub fn send_command(app: &mut App, command: SimulationCommand) {
    app.world_mut().send_event(command);
}

/// Body positions in dense id order.
pub fn body_positions(app: &mut App) -> Vec<Vector> {
    let mut query = app
        .world_mut()
        .query_filtered::<(&BodyId, &Position), With<SimulationBody>>();
    let mut bodies: Vec<(usize, Vector)> = query
        .iter(app.world())
        .map(|(id, position)| (id.value(), position.value()))
        .collect();
    bodies.sort_by_key(|(id, _)| *id);
    bodies.into_iter().map(|(_, position)| position).collect()
}

/// Body velocities in dense id order.
pub fn body_velocities(app: &mut App) -> Vec<Vector> {
    let mut query = app
        .world_mut()
        .query_filtered::<(&BodyId, &Velocity), With<SimulationBody>>();
    let mut bodies: Vec<(usize, Vector)> = query
        .iter(app.world())
        .map(|(id, velocity)| (id.value(), velocity.value()))
        .collect();
    bodies.sort_by_key(|(id, _)| *id);
    bodies.into_iter().map(|(_, velocity)| velocity).collect()
}

/// Two equal masses on a circular orbit about the origin.
///
/// Each body sits `separation / 2` from the barycenter; the returned specs
/// are in force balance for the given gravitational constant.
pub fn circular_pair(gamma: Scalar, mass: Scalar, separation: Scalar) -> Vec<BodySpec> {
    let speed = (gamma * mass / (2.0 * separation)).sqrt();
    let offset = separation / 2.0;

    vec![
        BodySpec {
            id: 0,
            name: "alpha".to_string(),
            mass,
            position: Vector::new(-offset, 0.0, 0.0),
            velocity: Vector::new(0.0, -speed, 0.0),
            radius: 1.0,
        },
        BodySpec {
            id: 1,
            name: "beta".to_string(),
            mass,
            position: Vector::new(offset, 0.0, 0.0),
            velocity: Vector::new(0.0, speed, 0.0),
            radius: 1.0,
        },
    ]
}
