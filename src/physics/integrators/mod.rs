//! Numerical integration methods for the n-body core

use super::math::{Scalar, Vector};

pub mod explicit_euler;
pub mod semi_implicit_euler;

pub use explicit_euler::ExplicitEuler;
pub use semi_implicit_euler::SemiImplicitEuler;

/// Base trait for all integrators
///
/// The sub-stepped driver evaluates forces for the whole body set once per
/// sub-step and hands each body its fresh acceleration, so integrators only
/// see a single body's state.
pub trait Integrator: Send + Sync {
    /// Advance a single body's state by one sub-step
    ///
    /// # Arguments
    /// * `position` - Mutable reference to position
    /// * `velocity` - Mutable reference to velocity
    /// * `acceleration` - Acceleration evaluated at the current position
    /// * `dt` - Sub-step size
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar);

    /// Canonical name of this integrator
    fn name(&self) -> &'static str;

    fn clone_box(&self) -> Box<dyn Integrator>;
}
