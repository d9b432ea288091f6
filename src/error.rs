//! Error types for circuit wiring and the numerical routines.

use thiserror::Error;

/// Errors that can occur while wiring gates into a circuit.
///
/// Both variants are permanent construction failures: the offending gate is
/// not stored and the circuit is left exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CircuitError {
    /// The output variable is already driven by another gate.
    #[error("variable {0:?} is already driven by another gate")]
    Collision(String),

    /// The wiring would make a variable depend on itself.
    #[error("wiring would make variable {0:?} depend on itself")]
    Cycle(String),
}

/// Errors that can occur when setting up a numerical integration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntegrateError {
    /// The integration bounds are reversed.
    #[error("invalid integration range: lower ({lower}) > upper ({upper})")]
    InvalidRange { lower: f64, upper: f64 },

    /// The requested tolerance is not positive.
    #[error("invalid tolerance {0}, must be > 0")]
    InvalidTolerance(f64),
}

/// Errors that can occur while constructing a distribution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DistributionError {
    /// Mean and standard deviation must not both be zero.
    #[error("mean and standard deviation must not both be zero")]
    Degenerate,
}
