//! Physics resources for simulation

use super::integrators::{Integrator, SemiImplicitEuler};
use bevy::prelude::*;

/// Resource holding the currently active integrator
#[derive(Resource)]
pub struct CurrentIntegrator(pub Box<dyn Integrator>);

impl Default for CurrentIntegrator {
    fn default() -> Self {
        Self(Box::new(SemiImplicitEuler))
    }
}

impl Clone for CurrentIntegrator {
    fn clone(&self) -> Self {
        Self(self.0.clone_box())
    }
}
