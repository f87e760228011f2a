//! Closed-form solver for `a*x^3 + b*x^2 + c*x + d = 0` with real coefficients.
//!
//! ```
//! use cubic_solver_core::{solve, RootSet};
//!
//! let solution = solve(1.0, 0.0, 0.0, -8.0).unwrap();
//! assert!(matches!(solution.roots, RootSet::OneRealTwoComplex { .. }));
//! ```

pub mod cardano;
pub mod coefficients;
pub mod error;
pub mod reduction;
pub mod root_set;
pub mod verification;


pub use cardano::{solve, solve_coefficients, Solution};
pub use coefficients::{CubicCoefficients, Residual};
pub use error::SolveError;
pub use reduction::ReducedCubic;
pub use root_set::{RootCase, RootSet};
pub use verification::{verify_solution, VerifyResult, VerifyStatus, VerifySummary};
