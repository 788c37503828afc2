//! Pre-parsed scenario data
//!
//! Scenario files are parsed by the host application; the core only accepts
//! bodies whose fields are already converted to engine units (kilometers,
//! kilometers per second, kilograms) together with a reference datetime.

use crate::physics::math::{Scalar, Vector};
use chrono::NaiveDateTime;

/// Externally supplied description of one body.
///
/// `id` addresses the dense registry range: an id equal to the current body
/// count appends, a smaller id replaces that body's fields.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub id: usize,
    pub name: String,
    pub mass: Scalar,
    pub position: Vector,
    pub velocity: Vector,
    pub radius: Scalar,
}

impl Default for BodySpec {
    fn default() -> Self {
        Self {
            id: 0,
            name: "New Object".to_string(),
            mass: 1000.0,
            position: Vector::ZERO,
            velocity: Vector::ZERO,
            radius: 12756.0,
        }
    }
}

/// A complete replacement for the current simulation state.
///
/// Body ids must form the dense range `0..bodies.len()` in order; the epoch
/// becomes the clock's new reference datetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub epoch: NaiveDateTime,
    pub bodies: Vec<BodySpec>,
}
