//! eval subcommand handler.
//!
//! Solves coefficients given on the command line and prints the report as
//! text or JSON. No prompting, no screen clearing.

use anyhow::Result;
use clap::{Args, ValueEnum};
use cubic_solver_core::{solve, verify_solution, VerifySummary};

use crate::format::render_report;
use crate::json_types::{ErrorJsonOutput, SolveJsonOutput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for eval subcommand
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Coefficient of x^3 (must be non-zero)
    #[arg(allow_negative_numbers = true)]
    pub a: f64,

    /// Coefficient of x^2
    #[arg(allow_negative_numbers = true)]
    pub b: f64,

    /// Coefficient of x
    #[arg(allow_negative_numbers = true)]
    pub c: f64,

    /// Constant term
    #[arg(allow_negative_numbers = true)]
    pub d: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: &EvalArgs, precision: usize) -> Result<()> {
    let solution = match solve(args.a, args.b, args.c, args.d) {
        Ok(solution) => solution,
        Err(err) => {
            if args.format == OutputFormat::Json {
                print_pretty_json(&ErrorJsonOutput::from(&err))?;
            }
            return Err(err.into());
        }
    };

    match args.format {
        OutputFormat::Text => {
            for line in render_report(&solution, precision) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let verified = verify_solution(&solution).summary == VerifySummary::AllVerified;
            print_pretty_json(&SolveJsonOutput::new(&solution, verified))?;
        }
    }
    Ok(())
}

fn print_pretty_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
