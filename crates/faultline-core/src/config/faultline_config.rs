//! Top-level Faultline configuration.

use serde::{Deserialize, Serialize};

use super::{DriftDetectionConfig, ImpactConfig, RootCauseConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all analyzer configs.
///
/// Every value has a compiled default, so `FaultlineConfig::default()` is a
/// complete, valid configuration. Callers layer overrides on top with
/// [`FaultlineConfig::from_toml`] and [`FaultlineConfig::with_env_overrides`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FaultlineConfig {
    pub root_cause: RootCauseConfig,
    pub impact: ImpactConfig,
    pub drift: DriftDetectionConfig,
}

impl FaultlineConfig {
    /// Parse a configuration from a TOML document. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Pattern: `FAULTLINE_ROOT_CAUSE_MAX_HOPS`, `FAULTLINE_IMPACT_MAX_HOPS`, ...
    /// Unparseable values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(v) = env_parse::<usize>("FAULTLINE_ROOT_CAUSE_MAX_HOPS") {
            self.root_cause.max_hops = Some(v);
        }
        if let Some(v) = env_parse::<usize>("FAULTLINE_IMPACT_MAX_HOPS") {
            self.impact.max_hops = Some(v);
        }
        if let Some(v) = env_parse::<usize>("FAULTLINE_IMPACT_SPOF_THRESHOLD") {
            self.impact.spof_threshold = Some(v);
        }
        if let Some(v) = env_parse::<usize>("FAULTLINE_DRIFT_COMPOUND_HIGH_THRESHOLD") {
            self.drift.compound_high_threshold = Some(v);
        }
        self
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.root_cause.validate()?;
        self.impact.validate()?;
        self.drift.validate()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
