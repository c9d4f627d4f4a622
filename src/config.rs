//! Loading a custom breakpoint table from TOML.
//!
//! ```toml
//! [breakpoints]
//! xs = 320
//! sm = 800
//! md = 1020
//! lg = 1280
//! xl = 1440
//! xxl = 1920
//! ```
//!
//! A file without a `[breakpoints]` table yields [`GridBreakpoints::DEFAULT`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::breakpoint::{BreakpointError, GridBreakpoints, GridThresholds};

/// Errors that can occur when loading a breakpoint table.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read breakpoint config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse breakpoint config: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid breakpoint table: {0}")]
    Invalid(#[from] BreakpointError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    breakpoints: Option<GridThresholds>,
}

impl GridBreakpoints {
    /// Parses and validates a table from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|source| ConfigError::Parse { source })?;
        match file.breakpoints {
            Some(thresholds) => Ok(GridBreakpoints::try_from(thresholds)?),
            None => Ok(GridBreakpoints::DEFAULT),
        }
    }

    /// Reads a table from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading breakpoint table");
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
