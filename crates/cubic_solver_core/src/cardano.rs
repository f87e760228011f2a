//! Cardano's method on the depressed cubic.
//!
//! The cubic is normalised to `x^3 + r*x^2 + s*x + t`, depressed to
//! `y^3 + p*y + q` and classified by `D = (p/3)^3 + (q/2)^2`:
//!
//! - `D < 0`: three distinct real roots, trigonometric form
//! - `D = 0`: a simple and a double real root (triple when `p = q = 0`)
//! - `D > 0`: one real root and a complex-conjugate pair

use std::f64::consts::PI;

use tracing::debug;

use crate::coefficients::CubicCoefficients;
use crate::error::SolveError;
use crate::reduction::ReducedCubic;
use crate::root_set::{RootCase, RootSet};

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Everything computed while solving one cubic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub coefficients: CubicCoefficients,
    pub reduced: ReducedCubic,
    pub discriminant: f64,
    pub roots: RootSet,
}

impl Solution {
    pub fn case(&self) -> RootCase {
        self.roots.case()
    }

    pub fn real_roots(&self) -> Vec<f64> {
        self.roots.real_roots()
    }
}

/// Solve `a*x^3 + b*x^2 + c*x + d = 0`.
///
/// Fails with [`SolveError::DegenerateEquation`] when `a == 0`, before any
/// computation.
pub fn solve(a: f64, b: f64, c: f64, d: f64) -> Result<Solution, SolveError> {
    let coefficients = CubicCoefficients::new(a, b, c, d)?;
    Ok(solve_coefficients(&coefficients))
}

/// Solve an already validated coefficient set. Never fails.
pub fn solve_coefficients(coefficients: &CubicCoefficients) -> Solution {
    let reduced = ReducedCubic::from_coefficients(coefficients);
    let discriminant = reduced.discriminant();
    let case = RootCase::from_discriminant(discriminant);

    debug!(
        p = reduced.p,
        q = reduced.q,
        discriminant,
        case = case.as_str(),
        "reduced cubic"
    );

    let roots = match case {
        RootCase::ThreeReal => three_real_roots(&reduced, discriminant),
        RootCase::Repeated => repeated_real_roots(&reduced),
        RootCase::OneRealTwoComplex => one_real_two_complex(&reduced, discriminant),
    };

    debug!(?roots, "roots");

    Solution {
        coefficients: *coefficients,
        reduced,
        discriminant,
        roots,
    }
}

fn three_real_roots(red: &ReducedCubic, discriminant: f64) -> RootSet {
    let rho = (-red.p * red.p * red.p / 27.0).sqrt();
    let phi = (-discriminant).sqrt().atan2(-red.q / 2.0);
    let amplitude = 2.0 * rho.cbrt();
    let shift = red.shift();

    let root = |k: f64| amplitude * ((phi + 2.0 * PI * k) / 3.0).cos() - shift;

    RootSet::ThreeRealRoots {
        x1: root(0.0),
        x2: root(1.0),
        x3: root(2.0),
    }
}

/// Cardano pair `(u, v)` with `u^3 = w` and `u*v = -p/3`.
///
/// `None` when `w == 0`, which only happens for `p == q == 0`.
fn cardano_pair(p: f64, w: f64) -> Option<(f64, f64)> {
    let u = w.cbrt();
    if u == 0.0 {
        return None;
    }
    Some((u, -p / (3.0 * u)))
}

fn repeated_real_roots(red: &ReducedCubic) -> RootSet {
    let shift = red.shift();

    match cardano_pair(red.p, -red.q / 2.0) {
        Some((u, v)) => RootSet::RepeatedRealRoots {
            x1: u + v - shift,
            x2: -(u + v) / 2.0 - shift,
        },
        None => {
            debug!("p = q = 0, triple root");
            // 0.0 - shift rather than -shift: x^3 = 0 reports 0, not -0
            let x = 0.0 - shift;
            RootSet::RepeatedRealRoots { x1: x, x2: x }
        }
    }
}

fn one_real_two_complex(red: &ReducedCubic, discriminant: f64) -> RootSet {
    let shift = red.shift();
    // Pick the sign that avoids cancellation, so |w| >= sqrt(D) > 0.
    let sign = if red.q >= 0.0 { 1.0 } else { -1.0 };
    let w = -red.q / 2.0 - sign * discriminant.sqrt();

    let (u, v) = match cardano_pair(red.p, w) {
        Some(pair) => pair,
        // Unreachable for finite D > 0; keep the triple root as a fallback.
        None => (0.0, 0.0),
    };

    RootSet::OneRealTwoComplex {
        x1: u + v - shift,
        real_part: -(u + v) / 2.0 - shift,
        imag_part: HALF_SQRT_3 * (u - v).abs(),
    }
}
