use std::fmt;

/// Root structure of a real cubic, selected by the sign of the discriminant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootSet {
    /// `D < 0`: three distinct real roots.
    ThreeRealRoots { x1: f64, x2: f64, x3: f64 },
    /// `D == 0`: a simple root `x1` and a double root `x2`.
    /// When `p == q == 0` all three roots coincide and `x1 == x2`.
    RepeatedRealRoots { x1: f64, x2: f64 },
    /// `D > 0`: one real root and the pair `real_part ± imag_part*i`.
    OneRealTwoComplex {
        x1: f64,
        real_part: f64,
        imag_part: f64,
    },
}

/// Field-less tag of a [`RootSet`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootCase {
    ThreeReal,
    Repeated,
    OneRealTwoComplex,
}

impl RootCase {
    /// Classify a discriminant value. Exact comparison, no tolerance.
    pub fn from_discriminant(d: f64) -> Self {
        if d < 0.0 {
            RootCase::ThreeReal
        } else if d == 0.0 {
            RootCase::Repeated
        } else {
            RootCase::OneRealTwoComplex
        }
    }

    /// Stable machine-readable identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            RootCase::ThreeReal => "three_real",
            RootCase::Repeated => "repeated_real",
            RootCase::OneRealTwoComplex => "one_real_two_complex",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RootCase::ThreeReal => "three distinct real roots",
            RootCase::Repeated => "repeated real roots",
            RootCase::OneRealTwoComplex => "one real root and two complex conjugate roots",
        }
    }
}

impl fmt::Display for RootCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl RootSet {
    pub fn case(&self) -> RootCase {
        match self {
            RootSet::ThreeRealRoots { .. } => RootCase::ThreeReal,
            RootSet::RepeatedRealRoots { .. } => RootCase::Repeated,
            RootSet::OneRealTwoComplex { .. } => RootCase::OneRealTwoComplex,
        }
    }

    /// Real roots counted with multiplicity (a double root appears twice).
    pub fn real_roots(&self) -> Vec<f64> {
        match *self {
            RootSet::ThreeRealRoots { x1, x2, x3 } => vec![x1, x2, x3],
            RootSet::RepeatedRealRoots { x1, x2 } => vec![x1, x2, x2],
            RootSet::OneRealTwoComplex { x1, .. } => vec![x1],
        }
    }

    /// Sum of all three roots (complex pair contributes `2 * real_part`).
    pub fn sum(&self) -> f64 {
        match *self {
            RootSet::ThreeRealRoots { x1, x2, x3 } => x1 + x2 + x3,
            RootSet::RepeatedRealRoots { x1, x2 } => x1 + 2.0 * x2,
            RootSet::OneRealTwoComplex { x1, real_part, .. } => x1 + 2.0 * real_part,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminant_sign_selects_case() {
        assert_eq!(RootCase::from_discriminant(-1e-300), RootCase::ThreeReal);
        assert_eq!(RootCase::from_discriminant(0.0), RootCase::Repeated);
        assert_eq!(RootCase::from_discriminant(-0.0), RootCase::Repeated);
        assert_eq!(
            RootCase::from_discriminant(1e-300),
            RootCase::OneRealTwoComplex
        );
    }

    #[test]
    fn double_root_counted_twice() {
        let roots = RootSet::RepeatedRealRoots { x1: -2.0, x2: 1.0 };
        assert_eq!(roots.real_roots(), vec![-2.0, 1.0, 1.0]);
        assert_eq!(roots.sum(), 0.0);
        assert_eq!(roots.case(), RootCase::Repeated);
    }

    #[test]
    fn complex_pair_has_single_real_root() {
        let roots = RootSet::OneRealTwoComplex {
            x1: 2.0,
            real_part: -1.0,
            imag_part: 3f64.sqrt(),
        };
        assert_eq!(roots.real_roots(), vec![2.0]);
        assert_eq!(roots.sum(), 0.0);
    }
}
