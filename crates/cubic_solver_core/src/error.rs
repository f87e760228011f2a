//! Error types for cubic_solver_core.

use thiserror::Error;

/// Errors raised before any root computation starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// Leading coefficient is zero: the equation is not a cubic.
    #[error("degenerate equation: leading coefficient is zero, not a cubic")]
    DegenerateEquation,

    /// A coefficient is NaN or infinite.
    #[error("coefficient '{name}' is not a finite number ({value})")]
    NonFiniteCoefficient { name: &'static str, value: f64 },
}
