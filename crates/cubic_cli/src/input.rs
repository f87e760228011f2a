//! Coefficient acquisition.
//!
//! Parsing a line is a pure step returning a tagged [`CoefficientInput`]; the
//! retry loop lives in [`CoefficientReader`] under a caller-chosen
//! [`RetryPolicy`], and end of input ends the loop instead of spinning.

use std::io::{self, BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;
use tracing::debug;

use crate::screen::Screen;

/// Outcome of parsing one line of user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoefficientInput {
    Value(f64),
    /// Not a finite floating-point literal
    Invalid,
    /// Exactly zero where zero is rejected
    Zero,
}

impl CoefficientInput {
    /// Retry message shown to the user, if this input is rejected.
    pub fn diagnostic(&self) -> Option<&'static str> {
        match self {
            CoefficientInput::Value(_) => None,
            CoefficientInput::Invalid => Some("Invalid input. Please try again."),
            CoefficientInput::Zero => Some("Value cannot be zero. Please try again."),
        }
    }
}

/// Parse the first whitespace-separated token of `line`.
///
/// Trailing tokens are ignored. Empty lines and non-finite values are invalid.
pub fn parse_coefficient(line: &str, reject_zero: bool) -> CoefficientInput {
    let value = match line.split_whitespace().next().map(str::parse::<f64>) {
        Some(Ok(v)) if v.is_finite() => v,
        _ => return CoefficientInput::Invalid,
    };

    if reject_zero && value == 0.0 {
        CoefficientInput::Zero
    } else {
        CoefficientInput::Value(value)
    }
}

/// Fatal input failures. Rejected values are retried and never surface here.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("input closed before a value for '{name}' was read")]
    Closed { name: String },

    #[error("no valid value for '{name}' after {attempts} attempts")]
    RetriesExhausted { name: String, attempts: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// How many attempts a single prompt may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetryPolicy {
    /// `None` retries forever
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    pub fn bounded(max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    fn allows(&self, attempts_so_far: u32) -> bool {
        self.max_attempts.map_or(true, |max| attempts_so_far < max)
    }
}

/// A source of input lines. `Ok(None)` means end of input.
pub trait LineSource {
    /// Show `prompt` and block until a line is available.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Line source over any buffered reader; the prompt is written to `prompt_out`.
pub struct ReaderSource<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> ReaderSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.prompt_out)
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.prompt_out, "{prompt}")?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Terminal line source with line editing and history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(line.as_str());
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(err)) => Err(err),
            Err(err) => Err(io::Error::new(io::ErrorKind::Other, err.to_string())),
        }
    }
}

/// Prompts for coefficients, retrying rejected values.
pub struct CoefficientReader<'a> {
    source: &'a mut dyn LineSource,
    screen: &'a mut dyn Screen,
    policy: RetryPolicy,
}

impl<'a> CoefficientReader<'a> {
    pub fn new(
        source: &'a mut dyn LineSource,
        screen: &'a mut dyn Screen,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            source,
            screen,
            policy,
        }
    }

    /// Prompt `Input value for {name}: ` until an acceptable value arrives.
    pub fn read_coefficient(&mut self, name: &str, reject_zero: bool) -> Result<f64, InputError> {
        let prompt = format!("Input value for {name}: ");
        let mut attempts = 0;

        loop {
            if !self.policy.allows(attempts) {
                return Err(InputError::RetriesExhausted {
                    name: name.to_string(),
                    attempts,
                });
            }
            attempts += 1;

            let Some(line) = self.source.read_line(&prompt)? else {
                return Err(InputError::Closed {
                    name: name.to_string(),
                });
            };

            match parse_coefficient(&line, reject_zero) {
                CoefficientInput::Value(value) => {
                    debug!(name, attempts, value, "coefficient accepted");
                    return Ok(value);
                }
                rejected => {
                    debug!(name, attempts, ?rejected, "coefficient rejected");
                    if let Some(message) = rejected.diagnostic() {
                        self.screen.write_line(message)?;
                    }
                }
            }
        }
    }

    /// Read `a`, `b`, `c`, `d` in order; only `a` rejects zero.
    pub fn read_all(&mut self) -> Result<(f64, f64, f64, f64), InputError> {
        let a = self.read_coefficient("a", true)?;
        let b = self.read_coefficient("b", false)?;
        let c = self.read_coefficient("c", false)?;
        let d = self.read_coefficient("d", false)?;
        Ok((a, b, c, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::RecordingScreen;
    use std::io::Cursor;

    fn source(input: &str) -> ReaderSource<Cursor<Vec<u8>>, Vec<u8>> {
        ReaderSource::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn parses_first_token() {
        assert_eq!(parse_coefficient("2.5\n", false), CoefficientInput::Value(2.5));
        assert_eq!(parse_coefficient("  -3 trailing\n", false), CoefficientInput::Value(-3.0));
        assert_eq!(parse_coefficient("1e3", true), CoefficientInput::Value(1000.0));
    }

    #[test]
    fn rejects_garbage_empty_and_non_finite() {
        assert_eq!(parse_coefficient("abc\n", false), CoefficientInput::Invalid);
        assert_eq!(parse_coefficient("\n", false), CoefficientInput::Invalid);
        assert_eq!(parse_coefficient("inf", false), CoefficientInput::Invalid);
        assert_eq!(parse_coefficient("NaN", false), CoefficientInput::Invalid);
    }

    #[test]
    fn zero_rejected_only_when_requested() {
        assert_eq!(parse_coefficient("0", true), CoefficientInput::Zero);
        assert_eq!(parse_coefficient("-0.0", true), CoefficientInput::Zero);
        assert_eq!(parse_coefficient("0", false), CoefficientInput::Value(0.0));
    }

    #[test]
    fn non_numeric_then_valid_gives_one_diagnostic() {
        let mut src = source("abc\n4\n");
        let mut screen = RecordingScreen::default();
        let mut reader = CoefficientReader::new(&mut src, &mut screen, RetryPolicy::unbounded());

        assert_eq!(reader.read_coefficient("c", false).unwrap(), 4.0);
        assert_eq!(screen.lines, vec!["Invalid input. Please try again."]);
    }

    #[test]
    fn zero_for_a_then_non_zero_gives_one_diagnostic() {
        let mut src = source("0\n3\n");
        let mut screen = RecordingScreen::default();
        let mut reader = CoefficientReader::new(&mut src, &mut screen, RetryPolicy::unbounded());

        assert_eq!(reader.read_coefficient("a", true).unwrap(), 3.0);
        assert_eq!(screen.lines, vec!["Value cannot be zero. Please try again."]);
    }

    #[test]
    fn zero_for_b_accepted_immediately() {
        let mut src = source("0\n");
        let mut screen = RecordingScreen::default();
        let mut reader = CoefficientReader::new(&mut src, &mut screen, RetryPolicy::unbounded());

        assert_eq!(reader.read_coefficient("b", false).unwrap(), 0.0);
        assert!(screen.lines.is_empty());
    }

    #[test]
    fn prompts_name_each_coefficient() {
        let mut src = source("1\n2\n3\n4\n");
        let mut screen = RecordingScreen::default();
        let values = CoefficientReader::new(&mut src, &mut screen, RetryPolicy::unbounded())
            .read_all()
            .unwrap();

        assert_eq!(values, (1.0, 2.0, 3.0, 4.0));
        let prompts = String::from_utf8(src.prompt_out).unwrap();
        assert_eq!(
            prompts,
            "Input value for a: Input value for b: Input value for c: Input value for d: "
        );
    }

    #[test]
    fn end_of_input_is_closed_not_a_loop() {
        let mut src = source("x\n");
        let mut screen = RecordingScreen::default();
        let mut reader = CoefficientReader::new(&mut src, &mut screen, RetryPolicy::unbounded());

        let err = reader.read_coefficient("a", true).unwrap_err();
        assert!(matches!(err, InputError::Closed { ref name } if name == "a"));
        assert_eq!(screen.count_containing("Invalid input"), 1);
    }

    #[test]
    fn bounded_policy_gives_up() {
        let mut src = source("0\n0\n0\n1\n");
        let mut screen = RecordingScreen::default();
        let mut reader = CoefficientReader::new(&mut src, &mut screen, RetryPolicy::bounded(2));

        let err = reader.read_coefficient("a", true).unwrap_err();
        assert!(matches!(
            err,
            InputError::RetriesExhausted { attempts: 2, .. }
        ));
        assert_eq!(screen.count_containing("cannot be zero"), 2);
    }
}
