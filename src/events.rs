//! Centralized event definitions
//!
//! All events in the orrery core are defined in this module to maintain
//! clear boundaries between systems and improve discoverability. Events are
//! the primary mechanism by which presentation layers talk to the core:
//! commands may be sent at any time and are applied at the next tick
//! boundary, never mid-integration.

use crate::physics::math::Scalar;
use crate::scenario::{BodySpec, Scenario};
use bevy::prelude::*;

// Unified simulation command pattern
#[derive(Event, Debug, Clone, PartialEq)]
pub enum SimulationCommand {
    /// Snapshot the current state as the baseline and begin ticking.
    Start,
    /// Halt future ticks, leaving the last computed state intact.
    Stop,
    /// Restore the baseline captured by the last `Start`.
    Restart,
    /// Add a body (id equal to the body count) or replace its fields.
    UpsertBody(BodySpec),
    /// Delete a body; every id above it is relabeled downward by one.
    RemoveBody(usize),
    SetGravitationalConstant { base: Scalar, exponent: i32 },
    SetSubsteps(u32),
    SetTrajectoryCapacity(usize),
    SetTimeScale { factor: Scalar, multiplier: Scalar },
    /// Replace the whole state and reset the clock to the scenario epoch.
    LoadScenario(Scenario),
}
