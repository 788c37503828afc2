//! Body components for the n-body simulation

use crate::components::Trajectory;
use crate::physics::math::{Scalar, Vector};
use crate::scenario::BodySpec;
use bevy::prelude::*;

/// Marker component for bodies that belong to the simulation
#[derive(Component, Debug, Default)]
pub struct SimulationBody;

/// Dense registry identity.
///
/// Ids always form the range `0..n` over the live body set; deleting a body
/// relabels every id above it downward by one.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub usize);

impl BodyId {
    #[inline]
    pub fn value(&self) -> usize {
        self.0
    }
}

/// Mass in kilograms. Zero is allowed and marks a massless tracer that
/// feels gravity without exerting any.
#[derive(Component, Debug, Clone, Copy)]
pub struct Mass(pub Scalar);

impl Mass {
    pub fn new(mass: Scalar) -> Self {
        Self(mass)
    }

    #[inline]
    pub fn value(&self) -> Scalar {
        self.0
    }
}

/// Position in kilometers
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Position(pub Vector);

impl Position {
    pub fn new(position: Vector) -> Self {
        Self(position)
    }

    #[inline]
    pub fn value(&self) -> Vector {
        self.0
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut Vector {
        &mut self.0
    }
}

/// Velocity in kilometers per second
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Velocity(pub Vector);

impl Velocity {
    pub fn new(velocity: Vector) -> Self {
        Self(velocity)
    }

    #[inline]
    pub fn value(&self) -> Vector {
        self.0
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut Vector {
        &mut self.0
    }
}

/// Display radius in kilometers; never enters the force calculation.
#[derive(Component, Debug, Clone, Copy)]
pub struct Radius(pub Scalar);

impl Radius {
    pub fn new(radius: Scalar) -> Self {
        Self(radius)
    }

    #[inline]
    pub fn value(&self) -> Scalar {
        self.0
    }
}

/// Component bundle for spawning simulation bodies
#[derive(Bundle)]
pub struct BodyBundle {
    pub body: SimulationBody,
    pub id: BodyId,
    pub name: Name,
    pub position: Position,
    pub velocity: Velocity,
    pub mass: Mass,
    pub radius: Radius,
    pub trajectory: Trajectory,
}

impl BodyBundle {
    pub fn from_spec(spec: &BodySpec, trajectory_capacity: usize) -> Self {
        Self {
            body: SimulationBody,
            id: BodyId(spec.id),
            name: Name::new(spec.name.clone()),
            position: Position::new(spec.position),
            velocity: Velocity::new(spec.velocity),
            mass: Mass::new(spec.mass),
            radius: Radius::new(spec.radius),
            trajectory: Trajectory::new(trajectory_capacity),
        }
    }
}
