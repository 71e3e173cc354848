//! Dashboard configuration
//!
//! Persisted with confy as `serpdash/config.toml` in the platform config dir.
//! Missing or unreadable files fall back to defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::charts::DEFAULT_TOP_N;
use crate::links::DEFAULT_REFERENCE_PATH;

const APP_NAME: &str = "serpdash";
const CONFIG_NAME: &str = "config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),

    #[error("chart size must be at least 1")]
    InvalidTopN,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Reference link CSV, relative to the working directory unless absolute
    #[serde(default = "default_links_path")]
    pub links_path: String,
    /// Categories drawn in each chart
    #[serde(default = "default_chart_top_n")]
    pub chart_top_n: usize,
}

fn default_links_path() -> String {
    DEFAULT_REFERENCE_PATH.to_string()
}

fn default_chart_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            links_path: default_links_path(),
            chart_top_n: default_chart_top_n(),
        }
    }
}

impl DashboardConfig {
    /// Load from the config dir, falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Using default configuration");
                Self::default()
            }
        }
    }

    pub fn try_load() -> Result<Self, ConfigError> {
        let config: Self = confy::load(APP_NAME, CONFIG_NAME)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.validate()?;
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chart_top_n == 0 {
            return Err(ConfigError::InvalidTopN);
        }
        Ok(())
    }

    /// Location of the config file, if the platform has a config dir.
    pub fn file_path() -> Option<PathBuf> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).ok()
    }

    pub fn links_path(&self) -> PathBuf {
        PathBuf::from(&self.links_path)
    }
}
