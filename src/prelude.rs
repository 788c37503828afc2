//! Orrery prelude module
//!
//! Re-exports the most commonly used types, traits, and functions across
//! the crate to reduce import boilerplate.

// External crate re-exports
pub use bevy::prelude::*;

// Internal re-exports - Config
pub use crate::config::{IntegratorType, SimulationConfig};

// Internal re-exports - States
pub use crate::states::AppState;

// Internal re-exports - Events
pub use crate::events::SimulationCommand;

// Internal re-exports - Errors
pub use crate::error::SimulationError;

// Internal re-exports - Resources
pub use crate::resources::{
    BodyRegistry, GravitationalConstant, SimulationBaseline, SimulationClock, SubstepCount,
    TrajectoryCapacity,
};

// Internal re-exports - Components
pub use crate::components::Trajectory;
pub use crate::physics::components::{
    BodyBundle, BodyId, Mass, Position, Radius, SimulationBody, Velocity,
};

// Internal re-exports - Physics
pub use crate::physics::integrators::{ExplicitEuler, Integrator, SemiImplicitEuler};
pub use crate::physics::math::{Scalar, Vector};
pub use crate::physics::resources::CurrentIntegrator;

// Internal re-exports - Scenario data
pub use crate::scenario::{BodySpec, Scenario};

// Internal re-exports - Plugin
pub use crate::plugins::SimulationPlugin;
