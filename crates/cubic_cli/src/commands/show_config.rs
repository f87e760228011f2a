use anyhow::Result;

use crate::config::CubicConfig;

/// Print the effective configuration (file values plus flag overrides) as TOML.
pub fn run(config: &CubicConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
