use crate::error::SolveError;

/// Absolute floor of the residual tolerance used by [`CubicCoefficients::verify`].
pub const ABS_TOLERANCE: f64 = 1e-9;

/// Relative part of the residual tolerance, scaled by the largest term of `f(x)`.
pub const REL_TOLERANCE: f64 = 1e-6;

/// Coefficients of `a*x^3 + b*x^2 + c*x + d = 0`.
///
/// Construction through [`CubicCoefficients::new`] guarantees `a != 0`, so a
/// value of this type always describes a genuine cubic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCoefficients {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

/// Outcome of substituting a candidate root back into the polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residual {
    /// `|f(x)|`
    pub value: f64,
    /// Tolerance the residual was compared against.
    pub tolerance: f64,
}

impl Residual {
    pub fn within_tolerance(&self) -> bool {
        self.value <= self.tolerance
    }
}

impl CubicCoefficients {
    /// Validate and build a coefficient set.
    ///
    /// Rejects `a == 0` with [`SolveError::DegenerateEquation`] and any
    /// non-finite coefficient with [`SolveError::NonFiniteCoefficient`].
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self, SolveError> {
        for (name, value) in [("a", a), ("b", b), ("c", c), ("d", d)] {
            if !value.is_finite() {
                return Err(SolveError::NonFiniteCoefficient { name, value });
            }
        }
        if a == 0.0 {
            return Err(SolveError::DegenerateEquation);
        }
        Ok(Self { a, b, c, d })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    /// `(a, b, c, d)` in order of descending degree.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.a, self.b, self.c, self.d)
    }

    /// Evaluate `f(x)` with Horner's scheme.
    pub fn evaluate(&self, x: f64) -> f64 {
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }

    /// Substitute `x` and compare `|f(x)|` against a tolerance scaled by the
    /// magnitude of the individual terms.
    pub fn verify(&self, x: f64) -> Residual {
        let scale = [
            (self.a * x * x * x).abs(),
            (self.b * x * x).abs(),
            (self.c * x).abs(),
            self.d.abs(),
        ]
        .into_iter()
        .fold(0.0_f64, f64::max);

        Residual {
            value: self.evaluate(x).abs(),
            tolerance: ABS_TOLERANCE + REL_TOLERANCE * scale,
        }
    }
}
