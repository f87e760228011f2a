use crate::cardano::Solution;
use crate::coefficients::Residual;

/// Result of substituting a single real root back into the cubic.
#[derive(Debug, Clone, PartialEq)]
pub enum VerifyStatus {
    /// `|f(x)|` lies within tolerance.
    Verified { residual: f64 },
    /// Residual remains above tolerance.
    Unverified { residual: f64, tolerance: f64 },
}

/// Summary of verification for a solution's real roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifySummary {
    AllVerified,
    PartiallyVerified,
    NoneVerified,
}

/// Result of verifying every real root of a [`Solution`].
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyResult {
    /// Status for each real root, in reporting order (double root listed once).
    pub roots: Vec<(f64, VerifyStatus)>,
    pub summary: VerifySummary,
}

impl From<Residual> for VerifyStatus {
    fn from(residual: Residual) -> Self {
        if residual.within_tolerance() {
            VerifyStatus::Verified {
                residual: residual.value,
            }
        } else {
            VerifyStatus::Unverified {
                residual: residual.value,
                tolerance: residual.tolerance,
            }
        }
    }
}

impl VerifyStatus {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerifyStatus::Verified { .. })
    }
}

/// Check each distinct real root of `solution` against its own coefficients.
pub fn verify_solution(solution: &Solution) -> VerifyResult {
    let mut distinct = solution.real_roots();
    distinct.dedup();

    let roots: Vec<(f64, VerifyStatus)> = distinct
        .into_iter()
        .map(|x| (x, solution.coefficients.verify(x).into()))
        .collect();

    let verified = roots.iter().filter(|(_, s)| s.is_verified()).count();
    let summary = if verified == roots.len() {
        VerifySummary::AllVerified
    } else if verified == 0 {
        VerifySummary::NoneVerified
    } else {
        VerifySummary::PartiallyVerified
    };

    VerifyResult { roots, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cardano::solve;
    use crate::root_set::RootSet;

    #[test]
    fn distinct_roots_all_verified() {
        let sol = solve(1.0, -6.0, 11.0, -6.0).unwrap();
        let result = verify_solution(&sol);
        assert_eq!(result.roots.len(), 3);
        assert_eq!(result.summary, VerifySummary::AllVerified);
    }

    #[test]
    fn double_root_checked_once() {
        let sol = solve(1.0, 0.0, -3.0, 2.0).unwrap();
        let result = verify_solution(&sol);
        assert_eq!(result.roots.len(), 2);
        assert_eq!(result.summary, VerifySummary::AllVerified);
    }

    #[test]
    fn tampered_root_is_reported() {
        let mut sol = solve(1.0, -6.0, 11.0, -6.0).unwrap();
        sol.roots = RootSet::ThreeRealRoots {
            x1: 1.0,
            x2: 2.0,
            x3: 3.5,
        };
        let result = verify_solution(&sol);
        assert_eq!(result.summary, VerifySummary::PartiallyVerified);
        assert!(!result.roots[2].1.is_verified());
    }
}
