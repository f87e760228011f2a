use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::format::DEFAULT_PRECISION;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "cubic_config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubicConfig {
    /// Clear the terminal before the banner and before the results
    pub clear_screen: bool,
    /// Wait for a final line of input before exiting
    pub wait_for_exit: bool,
    /// Attempts per prompt; absent means retry forever
    pub max_attempts: Option<u32>,
    /// Significant digits in text reports
    pub precision: usize,
}

impl Default for CubicConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            wait_for_exit: true,
            max_attempts: None,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl CubicConfig {
    /// Load from `cubic_config.toml` in the working directory.
    ///
    /// A missing file gives defaults; a broken one is reported and ignored.
    pub fn load() -> Self {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}. Using defaults.");
                Self::default()
            }
        }
    }

    /// Load from an explicit path; any failure is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
