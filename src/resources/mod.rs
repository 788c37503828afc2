use crate::physics::math::Scalar;
use crate::scenario::BodySpec;
use bevy::prelude::*;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Newtonian gravitational constant, kept as base and decimal exponent the
/// way the parameter panel edits it.
#[derive(Resource, Copy, Clone, PartialEq, Debug)]
pub struct GravitationalConstant {
    pub base: Scalar,
    pub exponent: i32,
}

impl GravitationalConstant {
    pub fn value(&self) -> Scalar {
        self.base * Scalar::powi(10.0, self.exponent)
    }
}

impl Default for GravitationalConstant {
    fn default() -> Self {
        Self {
            base: 6.674,
            exponent: -11,
        }
    }
}

/// Number of equal sub-steps one macro tick is split into. Fixed for the
/// duration of a tick; changes land at the next tick boundary.
#[derive(Resource, Deref, DerefMut, Copy, Clone, PartialEq, Eq, Debug)]
pub struct SubstepCount(pub u32);

impl Default for SubstepCount {
    fn default() -> Self {
        Self(1)
    }
}

/// Ring capacity shared by every body's trajectory history.
#[derive(Resource, Deref, DerefMut, Copy, Clone, PartialEq, Eq, Debug)]
pub struct TrajectoryCapacity(pub usize);

impl Default for TrajectoryCapacity {
    fn default() -> Self {
        Self(128)
    }
}

/// Dense id to entity mapping for the live body set.
///
/// The index of an entity in this list is its body id, so ids always form
/// the range `0..len` and deleting an entry relabels everything above it.
#[derive(Resource, Deref, DerefMut, Default, Debug)]
pub struct BodyRegistry(pub Vec<Entity>);

impl BodyRegistry {
    pub fn entity(&self, id: usize) -> Option<Entity> {
        self.0.get(id).copied()
    }
}

/// Simulated calendar time.
///
/// Each macro tick advances the datetime by `factor * multiplier` simulated
/// seconds, which is also the interval handed to the integrator. The clock
/// is deliberately decoupled from wall-clock frame timing: a tick always
/// advances by the same amount, trading wall-clock fidelity for
/// reproducible state at a fixed tick rate.
#[derive(Resource, Clone, PartialEq, Debug)]
pub struct SimulationClock {
    datetime: NaiveDateTime,
    reference: NaiveDateTime,
    factor: Scalar,
    multiplier: Scalar,
}

impl SimulationClock {
    pub fn with_scale(factor: Scalar, multiplier: Scalar) -> Self {
        Self {
            factor,
            multiplier,
            ..Self::default()
        }
    }

    /// Simulated seconds covered by one macro tick.
    pub fn tick_interval(&self) -> Scalar {
        self.factor * self.multiplier
    }

    pub fn set_scale(&mut self, factor: Scalar, multiplier: Scalar) {
        self.factor = factor;
        self.multiplier = multiplier;
    }

    pub fn factor(&self) -> Scalar {
        self.factor
    }

    pub fn multiplier(&self) -> Scalar {
        self.multiplier
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    /// Displayed datetime is host-writable.
    pub fn set_datetime(&mut self, datetime: NaiveDateTime) {
        self.datetime = datetime;
    }

    pub fn reference(&self) -> NaiveDateTime {
        self.reference
    }

    /// Advance by exactly one tick interval.
    pub fn advance(&mut self) {
        let nanoseconds = (self.tick_interval() * 1e9) as i64;
        self.datetime = self
            .datetime
            .checked_add_signed(TimeDelta::nanoseconds(nanoseconds))
            .unwrap_or(self.datetime);
    }

    /// Return to the current reference datetime.
    pub fn reset(&mut self) {
        self.datetime = self.reference;
    }

    /// Install a new reference datetime and jump to it (scenario import).
    pub fn reset_to(&mut self, reference: NaiveDateTime) {
        self.reference = reference;
        self.datetime = reference;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        let epoch = default_epoch();
        Self {
            datetime: epoch,
            reference: epoch,
            factor: 1.0,
            multiplier: 1.0,
        }
    }
}

fn default_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 2)
        .and_then(|date| date.and_hms_opt(15, 49, 0))
        .unwrap_or_default()
}

/// State captured when the animation starts, restored by restart.
#[derive(Resource, Default, Clone, Debug)]
pub struct SimulationBaseline(pub Option<BaselineSnapshot>);

#[derive(Clone, Debug, PartialEq)]
pub struct BaselineSnapshot {
    pub bodies: Vec<BodySpec>,
    pub datetime: NaiveDateTime,
}
