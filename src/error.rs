//! Error types raised at the mutation gateway boundary
//!
//! None of these are fatal. The gateway logs the offending command and
//! continues with the last valid state; degenerate geometry (coincident
//! bodies) is recovered inside the force accumulator and never surfaced.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("substep count must be positive")]
    InvalidSubstepCount,

    #[error("trajectory capacity must be positive")]
    InvalidTrajectoryCapacity,

    #[error("time scale must be finite and positive (factor {factor}, multiplier {multiplier})")]
    InvalidTimeScale { factor: f64, multiplier: f64 },

    #[error("gravitational constant base must be finite (got {base})")]
    InvalidGravitationalConstant { base: f64 },

    #[error("body `{name}` has a non-finite {field}")]
    NonFiniteBodyField { name: String, field: &'static str },

    #[error("body `{name}` has a negative {field}")]
    NegativeBodyField { name: String, field: &'static str },

    #[error("body id {id} is out of range for a registry of {len} bodies")]
    IdentityConflict { id: usize, len: usize },

    #[error("scenario `{name}` rejected: {source}")]
    InvalidScenario {
        name: String,
        #[source]
        source: Box<SimulationError>,
    },
}
