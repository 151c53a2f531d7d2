//! Configuration for the diagnostic engine.
//! Plain serde structs; the caller decides where the TOML comes from.

pub mod defaults;
pub mod drift_detection_config;
pub mod faultline_config;
pub mod impact_config;
pub mod root_cause_config;

pub use drift_detection_config::{DriftDetectionConfig, RemediationRule, TrackedField};
pub use faultline_config::FaultlineConfig;
pub use impact_config::{CascadeScope, ImpactConfig, RedundancyRule, SeverityTier};
pub use root_cause_config::RootCauseConfig;

use std::collections::BTreeSet;

use crate::errors::ConfigError;

pub(crate) fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

pub(crate) fn non_empty<T>(set: &Option<BTreeSet<T>>, field: &str) -> Result<(), ConfigError> {
    match set {
        Some(set) if set.is_empty() => Err(invalid(field, "must not be empty")),
        _ => Ok(()),
    }
}
