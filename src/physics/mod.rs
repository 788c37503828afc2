//! Physics core: body state, force accumulation, sub-stepped integration

pub mod components;
pub mod gravity;
pub mod integrators;
pub mod math;
pub mod resources;

use crate::error::SimulationError;
use integrators::Integrator;
use math::{Scalar, Vector};

/// Plain kinematic state of one body, decoupled from the ECS so the
/// integration core stays testable and benchmarkable on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Vector,
    pub velocity: Vector,
    pub mass: Scalar,
}

/// Advance all bodies by one macro tick of `dt`, split into `substeps`
/// equal sub-steps. Every sub-step re-evaluates pairwise gravity before
/// stepping the integrator, so force and motion never drift apart by more
/// than one sub-step.
///
/// `substeps` of zero is a caller-contract violation and is rejected before
/// anything is touched; `dt` of zero returns without mutating state.
pub fn advance(
    bodies: &mut [BodyState],
    gamma: Scalar,
    dt: Scalar,
    substeps: u32,
    integrator: &dyn Integrator,
) -> Result<(), SimulationError> {
    if substeps == 0 {
        return Err(SimulationError::InvalidSubstepCount);
    }
    if dt == 0.0 || bodies.is_empty() {
        return Ok(());
    }

    let h = dt / Scalar::from(substeps);
    let mut accelerations = vec![Vector::ZERO; bodies.len()];

    for _ in 0..substeps {
        gravity::accumulate_accelerations(bodies, gamma, &mut accelerations);
        for (body, acceleration) in bodies.iter_mut().zip(accelerations.iter()) {
            integrator.step(&mut body.position, &mut body.velocity, *acceleration, h);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::integrators::SemiImplicitEuler;
    use super::*;

    #[test]
    fn zero_substeps_is_rejected_untouched() {
        let mut bodies = vec![
            BodyState {
                position: Vector::ZERO,
                velocity: Vector::X,
                mass: 1.0,
            },
            BodyState {
                position: Vector::new(5.0, 0.0, 0.0),
                velocity: Vector::ZERO,
                mass: 1.0,
            },
        ];
        let before = bodies.clone();

        let result = advance(&mut bodies, 1.0, 0.1, 0, &SemiImplicitEuler);

        assert_eq!(result, Err(SimulationError::InvalidSubstepCount));
        assert_eq!(bodies, before);
    }

    #[test]
    fn zero_dt_is_a_noop() {
        let mut bodies = vec![
            BodyState {
                position: Vector::ZERO,
                velocity: Vector::X,
                mass: 1.0,
            },
            BodyState {
                position: Vector::new(5.0, 0.0, 0.0),
                velocity: Vector::ZERO,
                mass: 1.0,
            },
        ];
        let before = bodies.clone();

        advance(&mut bodies, 1.0, 0.0, 4, &SemiImplicitEuler).unwrap();

        assert_eq!(bodies, before);
    }

    #[test]
    fn lone_body_moves_in_a_straight_line() {
        let mut bodies = vec![BodyState {
            position: Vector::ZERO,
            velocity: Vector::new(2.0, 0.0, 0.0),
            mass: 1.0,
        }];

        advance(&mut bodies, 6.674e-11, 10.0, 5, &SemiImplicitEuler).unwrap();

        assert!((bodies[0].position.x - 20.0).abs() < 1e-12);
        assert_eq!(bodies[0].velocity, Vector::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn substeps_are_equal_subdivisions() {
        // Integrating 4 sub-steps in one call must equal 4 calls with dt/4
        let initial = vec![
            BodyState {
                position: Vector::new(-1.0, 0.0, 0.0),
                velocity: Vector::new(0.0, 0.5, 0.0),
                mass: 1.0,
            },
            BodyState {
                position: Vector::new(1.0, 0.0, 0.0),
                velocity: Vector::new(0.0, -0.5, 0.0),
                mass: 1.0,
            },
        ];

        let mut substepped = initial.clone();
        advance(&mut substepped, 1.0, 0.4, 4, &SemiImplicitEuler).unwrap();

        let mut repeated = initial;
        for _ in 0..4 {
            advance(&mut repeated, 1.0, 0.1, 1, &SemiImplicitEuler).unwrap();
        }

        for (a, b) in substepped.iter().zip(repeated.iter()) {
            assert!((a.position - b.position).length() < 1e-12);
            assert!((a.velocity - b.velocity).length() < 1e-12);
        }
    }
}
