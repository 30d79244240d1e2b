//! Configuration types and validation for spot disabling runs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::spot::{normalize, FilterSpec};

/// Settings for a `disable` run, loadable from JSON or YAML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotConfig {
    /// Colorant name filters; empty means every colorant
    pub filters: Vec<String>,
    /// Overwrite an existing output file
    pub force: bool,
    /// Copy the input to `<input>.backup` before writing
    pub backup: bool,
    /// Compress streams before saving
    pub compress: bool,
    /// Re-read the written file to check it parses
    pub verify_output: bool,
}

impl SpotConfig {
    /// Load a configuration file, trying JSON first and then YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: SpotConfig = serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|e| Error::Config(format!("Config parsing error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(filter) = self.filters.iter().find(|f| normalize(f).trim().is_empty()) {
            return Err(Error::Validation(format!("Empty spot filter {:?}", filter)));
        }
        Ok(())
    }

    /// Adds command-line filters after the configured ones
    pub fn merge_filters<I, S>(&mut self, filters: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.extend(filters.into_iter().map(Into::into));
    }

    /// Filter spec for this run: no filters disables everything
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec::from_cli(self.filters.as_slice())
    }
}
