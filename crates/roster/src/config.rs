//! Configuration file support.
//!
//! The config file is optional YAML. Every field has a default, and
//! command-line flags win over config values.

use std::path::{Path, PathBuf};

use roster_seeker::SortKey;
use serde::Deserialize;

use crate::error::{Result, RosterError};
use crate::output::OutputMode;

/// Settings read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Record dataset (JSON). The bundled sample is used when unset.
    pub records: Option<PathBuf>,

    /// Postal code table (CSV). The bundled sample is used when unset.
    pub postal_codes: Option<PathBuf>,

    /// Initial sort key.
    pub sort: SortKey,

    /// Default output mode.
    pub output: OutputMode,
}

impl RosterConfig {
    /// Parses a config from YAML text.
    pub fn from_yaml(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(RosterConfig::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    /// Loads the config at `path`, or the defaults when `path` is `None`.
    ///
    /// Relative dataset paths are resolved against the config file's
    /// directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(RosterConfig::default());
        };

        let source = std::fs::read_to_string(path).map_err(|source| RosterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = RosterConfig::from_yaml(&source)?;

        if let Some(base) = path.parent() {
            config.records = config.records.map(|p| base.join(p));
            config.postal_codes = config.postal_codes.map(|p| base.join(p));
        }

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
