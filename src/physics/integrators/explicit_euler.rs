//! Explicit Euler integration method (forward Euler)
//!
//! Kept for comparison against the symplectic default. Energy in a
//! conservative system drifts without bound under this method, so it is not
//! the one you want for orbits.

use super::Integrator;
use crate::physics::math::{Scalar, Vector};

/// Explicit Euler integrator (forward Euler method)
///
/// Position is updated before velocity, using the old velocity:
///
/// ```text
/// x(t+dt) = x(t) + v(t) * dt
/// v(t+dt) = v(t) + a(t) * dt
/// ```
///
/// Same cost per step as semi-implicit Euler, none of its conservation
/// behavior.
#[derive(Debug, Copy, Clone, Default)]
pub struct ExplicitEuler;

impl Integrator for ExplicitEuler {
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar) {
        // Position first, with the velocity from before this sub-step
        *position += *velocity * dt;

        // Then velocity from the acceleration at the old position
        *velocity += acceleration * dt;
    }

    fn name(&self) -> &'static str {
        "explicit_euler"
    }

    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }
}
