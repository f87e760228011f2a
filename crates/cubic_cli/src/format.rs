//! Text rendering of solver results.
//!
//! Numbers follow C's `%.Ng`: `N` significant digits, trailing zeros
//! stripped, scientific notation when the decimal exponent is below -4 or
//! at least `N`.

use cubic_solver_core::{RootSet, Solution};

/// Default number of significant digits in reports.
pub const DEFAULT_PRECISION: usize = 6;

/// Format `x` like C's `printf("%.{precision}g", x)`.
pub fn format_significant(x: f64, precision: usize) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = precision.max(1);
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to `precision` digits may bump the exponent (9.999995 -> 1e1),
    // so read it back from the rounded scientific form.
    let sci = format!("{:.*e}", precision - 1, x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= precision as i32 {
        let mantissa = strip_trailing_zeros(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Render the results report, one entry per output line.
pub fn render_report(solution: &Solution, precision: usize) -> Vec<String> {
    let g = |x: f64| format_significant(x, precision);
    let (a, b, c, d) = solution.coefficients.as_tuple();
    let red = &solution.reduced;

    let mut lines = vec![
        "Cubic equation results".to_string(),
        String::new(),
        format!("Equation: {}*x^3 + {}*x^2 + {}*x + {} = 0", g(a), g(b), g(c), g(d)),
        String::new(),
        format!("Discriminant: {}", g(solution.discriminant)),
        String::new(),
        format!("Q = {}  R = {}  S = {}", g(red.q), g(red.r), g(red.s)),
        String::new(),
        format!("Root structure: {}", solution.case()),
        "Roots:".to_string(),
    ];

    match solution.roots {
        RootSet::ThreeRealRoots { x1, x2, x3 } => {
            lines.push(format!("x1 = {}", g(x1)));
            lines.push(format!("x2 = {}", g(x2)));
            lines.push(format!("x3 = {}", g(x3)));
        }
        RootSet::RepeatedRealRoots { x1, x2 } => {
            lines.push(format!("x1 = {}", g(x1)));
            lines.push(format!("x2 = {} (double root)", g(x2)));
        }
        RootSet::OneRealTwoComplex {
            x1,
            real_part,
            imag_part,
        } => {
            lines.push(format!("x1 = {}", g(x1)));
            lines.push(format!("x2 = {} + {} * i", g(real_part), g(imag_part)));
            lines.push(format!("x3 = {} - {} * i", g(real_part), g(imag_part)));
        }
    }

    lines
}
