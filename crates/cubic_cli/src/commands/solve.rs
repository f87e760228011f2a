//! Interactive session: prompt for `a`, `b`, `c`, `d`, print the report,
//! wait for a final line.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use cubic_solver_core::{solve, verify_solution, Solution, VerifySummary};
use tracing::{info, warn};

use super::SessionSettings;
use crate::format::render_report;
use crate::input::{CoefficientReader, EditorSource, LineSource, ReaderSource};
use crate::screen::{Screen, StdoutScreen};

pub fn run(settings: &SessionSettings) -> Result<()> {
    let mut screen = StdoutScreen::new(settings.clear_screen);

    if io::stdin().is_terminal() {
        let mut source = EditorSource::new().context("cannot start line editor")?;
        run_session(&mut source, &mut screen, settings)?;
    } else {
        let mut source = ReaderSource::new(io::stdin().lock(), io::stdout());
        run_session(&mut source, &mut screen, settings)?;
    }
    Ok(())
}

/// Drive one session against any line source and screen.
pub fn run_session(
    source: &mut dyn LineSource,
    screen: &mut dyn Screen,
    settings: &SessionSettings,
) -> Result<Solution> {
    screen.clear()?;
    screen.write_line("Cubic equation solver")?;

    let (a, b, c, d) = CoefficientReader::new(source, screen, settings.policy).read_all()?;
    let solution = solve(a, b, c, d)?;
    info!(case = solution.case().as_str(), "solved");

    let verification = verify_solution(&solution);
    if verification.summary != VerifySummary::AllVerified {
        warn!(roots = ?verification.roots, "some roots do not satisfy the equation");
    }

    screen.clear()?;
    for line in render_report(&solution, settings.precision) {
        screen.write_line(&line)?;
    }

    if settings.wait_for_exit {
        wait_for_exit(source, screen)?;
    }
    Ok(solution)
}

/// Closed input counts as the key press.
fn wait_for_exit(source: &mut dyn LineSource, screen: &mut dyn Screen) -> io::Result<()> {
    screen.write_line("")?;
    source.read_line("Press any key to exit...")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputError, RetryPolicy};
    use crate::screen::RecordingScreen;
    use cubic_solver_core::RootSet;
    use std::io::Cursor;

    fn settings() -> SessionSettings {
        SessionSettings {
            clear_screen: true,
            wait_for_exit: true,
            policy: RetryPolicy::unbounded(),
            precision: 6,
        }
    }

    fn run_with(input: &str, settings: &SessionSettings) -> (Result<Solution>, RecordingScreen, String) {
        let mut source = ReaderSource::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut screen = RecordingScreen::default();
        let result = run_session(&mut source, &mut screen, settings);
        let (_, prompts) = source.into_parts();
        (result, screen, String::from_utf8(prompts).unwrap())
    }

    #[test]
    fn full_session_prints_report() {
        let (result, screen, prompts) = run_with("1\n-6\n11\n-6\n\n", &settings());
        let solution = result.unwrap();

        assert!(matches!(solution.roots, RootSet::ThreeRealRoots { .. }));
        assert_eq!(screen.lines[0], "Cubic equation solver");
        assert!(screen.lines.contains(&"Equation: 1*x^3 + -6*x^2 + 11*x + -6 = 0".to_string()));
        assert!(screen.lines.contains(&"Q = 0  R = -6  S = 11".to_string()));
        assert_eq!(screen.clears, 2);
        assert!(prompts.ends_with("Press any key to exit..."));
    }

    #[test]
    fn retries_are_reported_before_results() {
        let (result, screen, _) = run_with("0\n1\nfoo\n0\n0\n-8\n", &settings());
        assert!(result.is_ok());
        assert_eq!(screen.count_containing("Value cannot be zero"), 1);
        assert_eq!(screen.count_containing("Invalid input"), 1);
        assert!(screen.lines.contains(&"x1 = 2".to_string()));
    }

    #[test]
    fn closed_input_fails_fast() {
        let (result, screen, _) = run_with("1\n2\n", &settings());
        let err = result.unwrap_err();
        let input_err = err.downcast_ref::<InputError>().unwrap();
        assert!(matches!(input_err, InputError::Closed { name } if name == "c"));
        assert!(!screen.lines.iter().any(|l| l.starts_with("Roots")));
    }

    #[test]
    fn no_wait_skips_exit_prompt() {
        let settings = SessionSettings {
            wait_for_exit: false,
            ..settings()
        };
        let (result, _, prompts) = run_with("1\n0\n0\n0\n", &settings);
        assert!(result.is_ok());
        assert!(!prompts.contains("Press any key"));
    }
}
