//! Tick systems: integration, trajectory recording, clock advance

use crate::physics::{self, BodyState};
use crate::prelude::*;

/// Advance every body by one macro tick of the clock's interval, split into
/// the configured number of sub-steps.
pub fn integrate_motions(
    mut query: Query<(&BodyId, &mut Position, &mut Velocity, &Mass), With<SimulationBody>>,
    integrator: Res<CurrentIntegrator>,
    gamma: Res<GravitationalConstant>,
    substeps: Res<SubstepCount>,
    clock: Res<SimulationClock>,
) {
    let dt = clock.tick_interval();

    // Work over a scratch buffer in id order so the result never depends on
    // archetype iteration order
    let mut bodies: Vec<_> = query.iter_mut().collect();
    bodies.sort_by_key(|(id, _, _, _)| id.value());

    let mut states: Vec<BodyState> = bodies
        .iter()
        .map(|(_, position, velocity, mass)| BodyState {
            position: position.value(),
            velocity: velocity.value(),
            mass: mass.value(),
        })
        .collect();

    if let Err(error) = physics::advance(
        &mut states,
        gamma.value(),
        dt,
        substeps.0,
        integrator.0.as_ref(),
    ) {
        warn!("tick skipped: {}", error);
        return;
    }

    for ((_, position, velocity, _), state) in bodies.iter_mut().zip(states.iter()) {
        *position.value_mut() = state.position;
        *velocity.value_mut() = state.velocity;
    }
}

/// Append each body's position to its ring once per macro tick.
pub fn record_trajectories(
    mut query: Query<(&Position, &mut Trajectory), With<SimulationBody>>,
) {
    for (position, mut trajectory) in query.iter_mut() {
        trajectory.push(position.value());
    }
}

pub fn advance_clock(mut clock: ResMut<SimulationClock>) {
    clock.advance();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{body_positions, body_velocities, create_test_app, send_command};

    fn falling_pair() -> Vec<SimulationCommand> {
        let mut heavy = BodySpec {
            id: 0,
            name: "heavy".to_string(),
            ..BodySpec::default()
        };
        heavy.mass = 1e15;
        let mut probe = BodySpec {
            id: 1,
            name: "probe".to_string(),
            ..BodySpec::default()
        };
        probe.mass = 0.0;
        probe.position = Vector::new(1000.0, 0.0, 0.0);

        vec![
            SimulationCommand::SetGravitationalConstant {
                base: 6.674,
                exponent: -11,
            },
            SimulationCommand::UpsertBody(heavy),
            SimulationCommand::UpsertBody(probe),
        ]
    }

    #[test]
    fn bodies_do_not_move_while_stopped() {
        let mut app = create_test_app();
        for command in falling_pair() {
            send_command(&mut app, command);
        }
        app.update();

        let before = body_positions(&mut app);
        app.update();
        app.update();

        assert_eq!(body_positions(&mut app), before);
    }

    #[test]
    fn running_tick_accelerates_the_probe() {
        let mut app = create_test_app();
        for command in falling_pair() {
            send_command(&mut app, command);
        }
        send_command(&mut app, SimulationCommand::Start);
        app.update();
        app.update();

        let velocities = body_velocities(&mut app);
        // The massless probe falls toward the heavy body, which stays put
        assert_eq!(velocities[0], Vector::ZERO);
        assert!(velocities[1].x < 0.0);
    }

    #[test]
    fn trajectories_record_once_per_tick() {
        let mut app = create_test_app();
        for command in falling_pair() {
            send_command(&mut app, command);
        }
        send_command(&mut app, SimulationCommand::Start);
        app.update();

        for _ in 0..4 {
            app.update();
        }

        let mut query = app
            .world_mut()
            .query_filtered::<&Trajectory, With<SimulationBody>>();
        for trajectory in query.iter(app.world()) {
            assert_eq!(trajectory.len(), 5);
        }
    }

    #[test]
    fn clock_only_advances_while_running() {
        let mut app = create_test_app();

        let stopped_datetime = app.world().resource::<SimulationClock>().datetime();
        app.update();
        assert_eq!(
            app.world().resource::<SimulationClock>().datetime(),
            stopped_datetime
        );

        send_command(&mut app, SimulationCommand::Start);
        app.update();
        assert_ne!(
            app.world().resource::<SimulationClock>().datetime(),
            stopped_datetime
        );
    }
}
