//! Static configuration for the stopwatch.
//!
//! Layered loading with priority:
//! 1. Default values (hardcoded)
//! 2. Optional TOML config file
//! 3. Environment variables with the `QSW_` prefix (highest priority)
//!
//! The runtime [`TargetSelector`](crate::TargetSelector) hook stays the
//! authoritative extension point; this layer exists for hosts that pin their
//! target identifiers statically.

use config::Config;
use config::Environment;
use config::File;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::IDENTITY_PARAM;
use crate::targets::StaticTargets;
use crate::Error;
use crate::Result;

#[cfg(test)]
mod config_test;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StopwatchConfig {
    /// Identifiers whose executions get timed
    /// An empty string selects the pipeline's default query
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,

    /// Named query parameter the identity tag is read from
    #[serde(default = "default_identity_param")]
    pub identity_param: String,
}

fn default_targets() -> Vec<String> {
    vec![String::new()]
}

fn default_identity_param() -> String {
    IDENTITY_PARAM.to_string()
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            identity_param: default_identity_param(),
        }
    }
}

impl StopwatchConfig {
    /// Load configuration with priority:
    /// 1. Optional config file
    /// 2. Environment variables (`QSW_TARGETS` as a comma-separated list)
    ///
    /// # Arguments
    /// * `path` - Optional path to a TOML configuration file
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();

        // 1. Load file config
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // 2. Environment overlay
        builder = builder.add_source(
            Environment::with_prefix("QSW")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("targets"),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Rejects configurations that cannot be coerced into a usable target
    /// set.
    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(Error::InvalidConfiguration(
                "at least one target identifier is required".to_string(),
            ));
        }

        if self.identity_param.is_empty() {
            return Err(Error::InvalidConfiguration(
                "identity_param may not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Fixed selector over the configured identifiers.
    pub fn into_selector(self) -> StaticTargets {
        StaticTargets::new(self.targets)
    }
}
