use crate::coefficients::CubicCoefficients;

/// Monic and depressed forms of a cubic.
///
/// - monic: `x^3 + r*x^2 + s*x + t = 0` with `r = b/a`, `s = c/a`, `t = d/a`
/// - depressed (after `x = y - r/3`): `y^3 + p*y + q = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedCubic {
    pub r: f64,
    pub s: f64,
    pub t: f64,
    pub p: f64,
    pub q: f64,
}

impl ReducedCubic {
    pub fn from_coefficients(coeffs: &CubicCoefficients) -> Self {
        let (a, b, c, d) = coeffs.as_tuple();
        let r = b / a;
        let s = c / a;
        let t = d / a;

        let p = (3.0 * s - r * r) / 3.0;
        let q = 2.0 * r * r * r / 27.0 - r * s / 3.0 + t;

        Self { r, s, t, p, q }
    }

    /// `D = (p/3)^3 + (q/2)^2`
    pub fn discriminant(&self) -> f64 {
        (self.p / 3.0).powi(3) + (self.q / 2.0).powi(2)
    }

    /// Shift that maps a root `y` of the depressed cubic back to `x = y - r/3`.
    pub fn shift(&self) -> f64 {
        self.r / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(a: f64, b: f64, c: f64, d: f64) -> ReducedCubic {
        ReducedCubic::from_coefficients(&CubicCoefficients::new(a, b, c, d).unwrap())
    }

    #[test]
    fn monic_normalisation_divides_by_a() {
        let red = reduce(2.0, 4.0, -6.0, 8.0);
        assert_eq!((red.r, red.s, red.t), (2.0, -3.0, 4.0));
    }

    #[test]
    fn depressed_coefficients_for_distinct_integer_roots() {
        // (x-1)(x-2)(x-3) = x^3 - 6x^2 + 11x - 6
        let red = reduce(1.0, -6.0, 11.0, -6.0);
        assert_eq!(red.p, -1.0);
        assert_eq!(red.q, 0.0);
        assert!(red.discriminant() < 0.0);
    }

    #[test]
    fn perfect_cube_has_zero_discriminant() {
        // (x-1)^3
        let red = reduce(1.0, -3.0, 3.0, -1.0);
        assert_eq!(red.p, 0.0);
        assert_eq!(red.q, 0.0);
        assert_eq!(red.discriminant(), 0.0);
    }

    #[test]
    fn pure_cube_has_positive_discriminant() {
        // x^3 - 8
        let red = reduce(1.0, 0.0, 0.0, -8.0);
        assert_eq!(red.p, 0.0);
        assert_eq!(red.q, -8.0);
        assert_eq!(red.discriminant(), 16.0);
    }
}
