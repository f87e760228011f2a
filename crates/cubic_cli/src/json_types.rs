//! JSON output types for `eval --format json`.

use cubic_solver_core::{RootSet, Solution, SolveError};
use serde::Serialize;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize, Debug)]
pub struct SolveJsonOutput {
    pub schema_version: u32,
    pub ok: bool,
    pub coefficients: CoefficientsJson,
    pub r: f64,
    pub s: f64,
    pub t: f64,
    pub p: f64,
    pub q: f64,
    pub discriminant: f64,
    pub case: &'static str,
    pub roots: RootsJson,
    /// True when every real root substitutes back to ~0
    pub verified: bool,
}

#[derive(Serialize, Debug)]
pub struct CoefficientsJson {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

#[derive(Serialize, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RootsJson {
    ThreeReal {
        x1: f64,
        x2: f64,
        x3: f64,
    },
    RepeatedReal {
        x1: f64,
        /// double root
        x2: f64,
    },
    OneRealTwoComplex {
        x1: f64,
        real_part: f64,
        imag_part: f64,
    },
}

impl From<RootSet> for RootsJson {
    fn from(roots: RootSet) -> Self {
        match roots {
            RootSet::ThreeRealRoots { x1, x2, x3 } => RootsJson::ThreeReal { x1, x2, x3 },
            RootSet::RepeatedRealRoots { x1, x2 } => RootsJson::RepeatedReal { x1, x2 },
            RootSet::OneRealTwoComplex {
                x1,
                real_part,
                imag_part,
            } => RootsJson::OneRealTwoComplex {
                x1,
                real_part,
                imag_part,
            },
        }
    }
}

impl SolveJsonOutput {
    pub fn new(solution: &Solution, verified: bool) -> Self {
        let (a, b, c, d) = solution.coefficients.as_tuple();
        let red = &solution.reduced;
        Self {
            schema_version: SCHEMA_VERSION,
            ok: true,
            coefficients: CoefficientsJson { a, b, c, d },
            r: red.r,
            s: red.s,
            t: red.t,
            p: red.p,
            q: red.q,
            discriminant: solution.discriminant,
            case: solution.case().as_str(),
            roots: solution.roots.into(),
            verified,
        }
    }
}

/// An error result
#[derive(Serialize, Debug)]
pub struct ErrorJsonOutput {
    pub schema_version: u32,
    pub ok: bool,
    pub kind: &'static str,
    pub error: String,
}

impl From<&SolveError> for ErrorJsonOutput {
    fn from(err: &SolveError) -> Self {
        let kind = match err {
            SolveError::DegenerateEquation => "degenerate_equation",
            SolveError::NonFiniteCoefficient { .. } => "non_finite_coefficient",
        };
        Self {
            schema_version: SCHEMA_VERSION,
            ok: false,
            kind,
            error: err.to_string(),
        }
    }
}
