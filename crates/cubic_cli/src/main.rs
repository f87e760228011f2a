//! cubic_cli: solve `a*x^3 + b*x^2 + c*x + d = 0` interactively or from arguments.

mod commands;
mod config;
mod format;
mod input;
mod json_types;
mod screen;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::eval::EvalArgs;
use commands::{GlobalArgs, SessionSettings};

#[derive(Parser)]
#[command(name = "cubic_cli")]
#[command(about = "Solve a*x^3 + b*x^2 + c*x + d = 0 with Cardano's method")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for the four coefficients and print the roots (default).
    Solve,

    /// Solve coefficients given as arguments, without prompting.
    Eval(EvalArgs),

    /// Print the effective configuration as TOML.
    ShowConfig,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.global.merge_into(cli.global.load_config()?);
    let settings = SessionSettings::from(&config);

    match cli.command.unwrap_or(Commands::Solve) {
        Commands::Solve => commands::solve::run(&settings),
        Commands::Eval(args) => commands::eval::run(&args, settings.precision),
        Commands::ShowConfig => commands::show_config::run(&config),
    }
}
