//! Mutation gateway
//!
//! External edits arrive as [`SimulationCommand`] events at any time and
//! are drained here, at the start of a tick, by an exclusive system. A
//! command that fails validation is logged and skipped; the remaining
//! commands and the tick itself still run against the last valid state.

use crate::error::SimulationError;
use crate::prelude::*;
use bevy::ecs::event::Events;
use bevy::state::state::StateTransition;

/// Drain and apply every pending command in submission order.
pub fn apply_pending_commands(world: &mut World) {
    let commands: Vec<SimulationCommand> = world
        .resource_mut::<Events<SimulationCommand>>()
        .drain()
        .collect();

    for command in commands {
        if let Err(error) = apply_command(world, command) {
            warn!("rejected simulation command: {}", error);
        }
    }
}

fn apply_command(world: &mut World, command: SimulationCommand) -> Result<(), SimulationError> {
    match command {
        SimulationCommand::Start => start(world),
        SimulationCommand::Stop => stop(world),
        SimulationCommand::Restart => restart(world),
        SimulationCommand::UpsertBody(spec) => upsert_body(world, &spec),
        SimulationCommand::RemoveBody(id) => remove_body(world, id),
        SimulationCommand::SetGravitationalConstant { base, exponent } => {
            set_gravitational_constant(world, base, exponent)
        }
        SimulationCommand::SetSubsteps(substeps) => set_substeps(world, substeps),
        SimulationCommand::SetTrajectoryCapacity(capacity) => {
            set_trajectory_capacity(world, capacity)
        }
        SimulationCommand::SetTimeScale { factor, multiplier } => {
            set_time_scale(world, factor, multiplier)
        }
        SimulationCommand::LoadScenario(scenario) => load_scenario(world, scenario),
    }
}

fn start(world: &mut World) -> Result<(), SimulationError> {
    // Repeated start while running is a no-op
    if *world.resource::<State<AppState>>().get() == AppState::Running {
        return Ok(());
    }

    let bodies = snapshot_bodies(world);
    let datetime = world.resource::<SimulationClock>().datetime();
    world.resource_mut::<SimulationBaseline>().0 =
        Some(crate::resources::BaselineSnapshot { bodies, datetime });

    transition_to(world, AppState::Running);
    Ok(())
}

fn stop(world: &mut World) -> Result<(), SimulationError> {
    // Stop while stopped is a no-op; no rollback either way
    if *world.resource::<State<AppState>>().get() == AppState::Stopped {
        return Ok(());
    }

    transition_to(world, AppState::Stopped);
    Ok(())
}

fn restart(world: &mut World) -> Result<(), SimulationError> {
    let Some(baseline) = world.resource::<SimulationBaseline>().0.clone() else {
        return Ok(());
    };

    clear_bodies(world);
    let capacity = world.resource::<TrajectoryCapacity>().0;
    for spec in &baseline.bodies {
        spawn_body(world, spec, capacity);
    }
    world
        .resource_mut::<SimulationClock>()
        .set_datetime(baseline.datetime);
    Ok(())
}

fn upsert_body(world: &mut World, spec: &BodySpec) -> Result<(), SimulationError> {
    validate_body(spec)?;

    let len = world.resource::<BodyRegistry>().0.len();
    if spec.id > len {
        return Err(SimulationError::IdentityConflict { id: spec.id, len });
    }

    if spec.id == len {
        let capacity = world.resource::<TrajectoryCapacity>().0;
        spawn_body(world, spec, capacity);
        return Ok(());
    }

    let entity = world.resource::<BodyRegistry>().0[spec.id];
    let mut body = world.entity_mut(entity);
    if let Some(mut name) = body.get_mut::<Name>() {
        name.set(spec.name.clone());
    }
    if let Some(mut position) = body.get_mut::<Position>() {
        *position = Position::new(spec.position);
    }
    if let Some(mut velocity) = body.get_mut::<Velocity>() {
        *velocity = Velocity::new(spec.velocity);
    }
    if let Some(mut mass) = body.get_mut::<Mass>() {
        *mass = Mass::new(spec.mass);
    }
    if let Some(mut radius) = body.get_mut::<Radius>() {
        *radius = Radius::new(spec.radius);
    }
    Ok(())
}

fn remove_body(world: &mut World, id: usize) -> Result<(), SimulationError> {
    let len = world.resource::<BodyRegistry>().0.len();
    if id >= len {
        return Err(SimulationError::IdentityConflict { id, len });
    }

    let entity = world.resource_mut::<BodyRegistry>().0.remove(id);
    world.despawn(entity);

    // Deleting id k relabels every id above it downward, keeping the range dense
    let tail: Vec<Entity> = world.resource::<BodyRegistry>().0[id..].to_vec();
    for entity in tail {
        if let Some(mut body_id) = world.get_mut::<BodyId>(entity) {
            body_id.0 -= 1;
        }
    }
    Ok(())
}

fn set_gravitational_constant(
    world: &mut World,
    base: Scalar,
    exponent: i32,
) -> Result<(), SimulationError> {
    if !base.is_finite() {
        return Err(SimulationError::InvalidGravitationalConstant { base });
    }

    let mut gamma = world.resource_mut::<GravitationalConstant>();
    gamma.base = base;
    gamma.exponent = exponent;
    Ok(())
}

fn set_substeps(world: &mut World, substeps: u32) -> Result<(), SimulationError> {
    if substeps == 0 {
        return Err(SimulationError::InvalidSubstepCount);
    }

    world.resource_mut::<SubstepCount>().0 = substeps;
    Ok(())
}

fn set_trajectory_capacity(world: &mut World, capacity: usize) -> Result<(), SimulationError> {
    if capacity == 0 {
        return Err(SimulationError::InvalidTrajectoryCapacity);
    }

    world.resource_mut::<TrajectoryCapacity>().0 = capacity;

    let mut rings = world.query_filtered::<&mut Trajectory, With<SimulationBody>>();
    for mut trajectory in rings.iter_mut(world) {
        trajectory.resize(capacity);
    }
    Ok(())
}

fn set_time_scale(
    world: &mut World,
    factor: Scalar,
    multiplier: Scalar,
) -> Result<(), SimulationError> {
    if !factor.is_finite() || !multiplier.is_finite() || factor <= 0.0 || multiplier <= 0.0 {
        return Err(SimulationError::InvalidTimeScale { factor, multiplier });
    }

    world
        .resource_mut::<SimulationClock>()
        .set_scale(factor, multiplier);
    Ok(())
}

fn load_scenario(world: &mut World, scenario: Scenario) -> Result<(), SimulationError> {
    // Validated as a whole before anything is touched, so a half-imported
    // system can never exist
    for (expected_id, spec) in scenario.bodies.iter().enumerate() {
        validate_body(spec).map_err(|source| SimulationError::InvalidScenario {
            name: scenario.name.clone(),
            source: Box::new(source),
        })?;
        if spec.id != expected_id {
            return Err(SimulationError::InvalidScenario {
                name: scenario.name.clone(),
                source: Box::new(SimulationError::IdentityConflict {
                    id: spec.id,
                    len: expected_id,
                }),
            });
        }
    }

    clear_bodies(world);
    let capacity = world.resource::<TrajectoryCapacity>().0;
    for spec in &scenario.bodies {
        spawn_body(world, spec, capacity);
    }
    world
        .resource_mut::<SimulationClock>()
        .reset_to(scenario.epoch);
    // The baseline belonged to the replaced system
    world.resource_mut::<SimulationBaseline>().0 = None;
    Ok(())
}

fn validate_body(spec: &BodySpec) -> Result<(), SimulationError> {
    if !spec.position.is_finite() {
        return Err(SimulationError::NonFiniteBodyField {
            name: spec.name.clone(),
            field: "position",
        });
    }
    if !spec.velocity.is_finite() {
        return Err(SimulationError::NonFiniteBodyField {
            name: spec.name.clone(),
            field: "velocity",
        });
    }
    if !spec.mass.is_finite() {
        return Err(SimulationError::NonFiniteBodyField {
            name: spec.name.clone(),
            field: "mass",
        });
    }
    if !spec.radius.is_finite() {
        return Err(SimulationError::NonFiniteBodyField {
            name: spec.name.clone(),
            field: "radius",
        });
    }
    if spec.mass < 0.0 {
        return Err(SimulationError::NegativeBodyField {
            name: spec.name.clone(),
            field: "mass",
        });
    }
    if spec.radius < 0.0 {
        return Err(SimulationError::NegativeBodyField {
            name: spec.name.clone(),
            field: "radius",
        });
    }
    Ok(())
}

fn spawn_body(world: &mut World, spec: &BodySpec, trajectory_capacity: usize) {
    let entity = world
        .spawn(BodyBundle::from_spec(spec, trajectory_capacity))
        .id();
    world.resource_mut::<BodyRegistry>().0.push(entity);
}

fn clear_bodies(world: &mut World) {
    let entities: Vec<Entity> = std::mem::take(&mut world.resource_mut::<BodyRegistry>().0);
    for entity in entities {
        world.despawn(entity);
    }
}

/// Capture the live body set as specs, in id order.
fn snapshot_bodies(world: &mut World) -> Vec<BodySpec> {
    let mut query = world.query_filtered::<(
        &BodyId,
        &Name,
        &Position,
        &Velocity,
        &Mass,
        &Radius,
    ), With<SimulationBody>>();

    let mut bodies: Vec<BodySpec> = query
        .iter(world)
        .map(|(id, name, position, velocity, mass, radius)| BodySpec {
            id: id.value(),
            name: name.as_str().to_string(),
            mass: mass.value(),
            position: position.value(),
            velocity: velocity.value(),
            radius: radius.value(),
        })
        .collect();
    bodies.sort_by_key(|spec| spec.id);
    bodies
}

fn transition_to(world: &mut World, state: AppState) {
    world.resource_mut::<NextState<AppState>>().set(state);
    // Applied immediately so start and stop take effect at the tick
    // boundary where they were drained, never between a tick's systems
    let _ = world.try_run_schedule(StateTransition);
}
