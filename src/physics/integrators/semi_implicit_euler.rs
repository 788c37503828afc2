//! Semi-implicit Euler integration method

use super::Integrator;
use crate::physics::math::{Scalar, Vector};

/// Semi-implicit Euler integrator (also known as symplectic Euler)
///
/// First-order, one force evaluation per sub-step, and symplectic: the
/// velocity-first update preserves phase space volume, which keeps energy
/// error bounded instead of drifting over long orbital runs.
///
/// # Algorithm
///
/// ```text
/// Stage 1: Velocity update using current acceleration
///   v(t+dt) = v(t) + a(t) * dt
///
/// Stage 2: Position update using the NEW velocity
///   x(t+dt) = x(t) + v(t+dt) * dt
/// ```
///
/// The ordering is what matters. Updating position first gives explicit
/// Euler, which is not symplectic and lets orbital energy run away.
#[derive(Debug, Copy, Clone, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar) {
        // Update velocity first: v(t+dt) = v(t) + a(t) * dt
        *velocity += acceleration * dt;

        // Then position using the new velocity: x(t+dt) = x(t) + v(t+dt) * dt
        *position += *velocity * dt;
    }

    fn name(&self) -> &'static str {
        "semi_implicit_euler"
    }

    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_updates_before_position() {
        let integrator = SemiImplicitEuler;

        let mut position = Vector::new(1.0, 0.0, 0.0);
        let mut velocity = Vector::ZERO;
        let acceleration = Vector::new(-1.0, 0.0, 0.0);
        let dt = 0.1;

        integrator.step(&mut position, &mut velocity, acceleration, dt);

        // v = 0 + (-1) * 0.1
        assert_eq!(velocity, Vector::new(-0.1, 0.0, 0.0));
        // x = 1 + (-0.1) * 0.1, i.e. the new velocity is already in there
        assert_eq!(position, Vector::new(0.99, 0.0, 0.0));
    }

    #[test]
    fn constant_acceleration_step() {
        let integrator = SemiImplicitEuler;

        let mut position = Vector::new(1.0, 0.0, 0.0);
        let mut velocity = Vector::new(0.0, 1.0, 0.0);
        let acceleration = Vector::new(0.0, 0.0, -9.81);
        let dt = 0.01;

        integrator.step(&mut position, &mut velocity, acceleration, dt);

        assert_eq!(velocity, Vector::new(0.0, 1.0, -0.0981));
        assert!((position - Vector::new(1.0, 0.01, -0.000981)).length() < 1e-12);
    }
}
