//! Subcommand handlers and the settings they share.

pub mod eval;
pub mod show_config;
pub mod solve;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::CubicConfig;
use crate::input::RetryPolicy;

/// Flags accepted by every subcommand. Each overrides the config file.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Path to a TOML config file (default: ./cubic_config.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Give up after this many invalid answers to one prompt
    #[arg(long, global = true)]
    pub max_attempts: Option<u32>,

    /// Never clear the terminal
    #[arg(long, global = true, default_value_t = false)]
    pub no_clear: bool,

    /// Exit right after printing the results
    #[arg(long, global = true, default_value_t = false)]
    pub no_wait: bool,

    /// Significant digits in text output
    #[arg(long, global = true)]
    pub precision: Option<usize>,
}

impl GlobalArgs {
    /// Config file named by `--config`, or the default lookup.
    pub fn load_config(&self) -> Result<CubicConfig> {
        Ok(match &self.config {
            Some(path) => CubicConfig::load_from(path)?,
            None => CubicConfig::load(),
        })
    }

    /// Apply command-line overrides on top of `config`.
    pub fn merge_into(&self, mut config: CubicConfig) -> CubicConfig {
        if self.no_clear {
            config.clear_screen = false;
        }
        if self.no_wait {
            config.wait_for_exit = false;
        }
        if let Some(n) = self.max_attempts {
            config.max_attempts = Some(n);
        }
        if let Some(p) = self.precision {
            config.precision = p;
        }
        config
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub clear_screen: bool,
    pub wait_for_exit: bool,
    pub policy: RetryPolicy,
    pub precision: usize,
}

impl From<&CubicConfig> for SessionSettings {
    fn from(config: &CubicConfig) -> Self {
        Self {
            clear_screen: config.clear_screen,
            wait_for_exit: config.wait_for_exit,
            policy: match config.max_attempts {
                Some(n) => RetryPolicy::bounded(n),
                None => RetryPolicy::unbounded(),
            },
            precision: config.precision,
        }
    }
}
