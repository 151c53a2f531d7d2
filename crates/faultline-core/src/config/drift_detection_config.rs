//! Drift detection configuration: tracked fields and remediation actions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{defaults, invalid};
use crate::errors::ConfigError;
use crate::models::asset::attributes;
use crate::models::{AssetStatus, Severity};

/// Field name under which an asset's status is tracked.
pub const STATUS_FIELD: &str = "status";

/// A field compared between intended and actual state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedField {
    pub name: String,
    /// Severity of a mismatch on this field.
    pub severity: Severity,
    /// Severity used instead when the actual value names a failure status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_severity: Option<Severity>,
}

impl TrackedField {
    pub fn new(name: impl Into<String>, severity: Severity) -> Self {
        Self {
            name: name.into(),
            severity,
            failure_severity: None,
        }
    }

    pub fn with_failure_severity(mut self, severity: Severity) -> Self {
        self.failure_severity = Some(severity);
        self
    }
}

/// Remediation action generated for a drifted field.
///
/// `description` may reference `{asset}`, `{field}`, `{intended}` and `{actual}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationRule {
    pub field: String,
    pub action_id: String,
    pub title: String,
    pub description: String,
    pub priority: Severity,
    pub automatable: bool,
}

impl RemediationRule {
    fn new(
        field: &str,
        action_id: &str,
        title: &str,
        description: &str,
        priority: Severity,
        automatable: bool,
    ) -> Self {
        Self {
            field: field.to_string(),
            action_id: action_id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            priority,
            automatable,
        }
    }
}

/// Configuration for intended-vs-actual drift detection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DriftDetectionConfig {
    /// Tracked fields with their mismatch severity.
    pub fields: Option<Vec<TrackedField>>,
    /// Field → remediation action table.
    pub actions: Option<Vec<RemediationRule>>,
    /// Statuses that escalate a drifted field to its `failure_severity`.
    pub failure_statuses: Option<BTreeSet<AssetStatus>>,
    /// Number of `high` drifts that compound into `critical`. Default: 2.
    pub compound_high_threshold: Option<usize>,
    /// Actual value meaning "not observed"; never reported as drift. Default: "unknown".
    pub unknown_sentinel: Option<String>,
}

impl DriftDetectionConfig {
    /// The five fields tracked by default.
    pub fn default_fields() -> Vec<TrackedField> {
        vec![
            TrackedField::new(STATUS_FIELD, Severity::High)
                .with_failure_severity(Severity::Critical),
            TrackedField::new(attributes::IP_ADDRESS, Severity::High),
            TrackedField::new(attributes::VERSION, Severity::High),
            TrackedField::new(attributes::CONFIG_CHECKSUM, Severity::Medium),
            TrackedField::new(attributes::SECURITY_ZONE, Severity::High),
        ]
    }

    /// The default field → action table.
    pub fn default_actions() -> Vec<RemediationRule> {
        vec![
            RemediationRule::new(
                STATUS_FIELD,
                "investigate_failure",
                "Investigate Asset Failure",
                "Status of {asset} drifted from {intended} to {actual}. Run root-cause analysis to find the failing dependency.",
                Severity::Critical,
                false,
            ),
            RemediationRule::new(
                attributes::VERSION,
                "sync_version",
                "Update to Intended Version",
                "Move {asset} from version {actual} to {intended}.",
                Severity::High,
                true,
            ),
            RemediationRule::new(
                attributes::IP_ADDRESS,
                "update_network",
                "Update Network Configuration",
                "Reconfigure {asset} from IP {actual} to {intended}.",
                Severity::Medium,
                true,
            ),
            RemediationRule::new(
                attributes::CONFIG_CHECKSUM,
                "sync_config",
                "Sync Configuration from Git",
                "Configuration of {asset} has drifted ({actual} != {intended}). Pull the intended configuration from the GitOps repository.",
                Severity::High,
                true,
            ),
            RemediationRule::new(
                attributes::SECURITY_ZONE,
                "update_zone",
                "Reassign Security Zone",
                "Move {asset} from zone {actual} to {intended}.",
                Severity::Critical,
                false,
            ),
        ]
    }

    pub fn effective_fields(&self) -> Vec<TrackedField> {
        self.fields.clone().unwrap_or_else(Self::default_fields)
    }

    pub fn effective_actions(&self) -> Vec<RemediationRule> {
        self.actions.clone().unwrap_or_else(Self::default_actions)
    }

    pub fn effective_failure_statuses(&self) -> BTreeSet<AssetStatus> {
        self.failure_statuses.clone().unwrap_or_else(|| {
            defaults::DEFAULT_DRIFT_FAILURE_STATUSES
                .iter()
                .copied()
                .collect()
        })
    }

    /// Returns the effective compounding threshold, defaulting to 2.
    pub fn effective_compound_high_threshold(&self) -> usize {
        self.compound_high_threshold
            .unwrap_or(defaults::DEFAULT_COMPOUND_HIGH_THRESHOLD)
    }

    /// Returns the effective "not observed" sentinel, defaulting to "unknown".
    pub fn effective_unknown_sentinel(&self) -> String {
        self.unknown_sentinel
            .clone()
            .unwrap_or_else(|| defaults::DEFAULT_UNKNOWN_SENTINEL.to_string())
    }

    /// Reject empty or duplicate field names, more than one action per field,
    /// and a compounding threshold below 2.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(fields) = &self.fields {
            if fields.is_empty() {
                return Err(invalid("drift.fields", "must not be empty"));
            }
            let mut names = BTreeSet::new();
            for field in fields {
                if field.name.is_empty() {
                    return Err(invalid("drift.fields", "field name must not be empty"));
                }
                if !names.insert(field.name.as_str()) {
                    return Err(invalid(
                        "drift.fields",
                        &format!("duplicate field {}", field.name),
                    ));
                }
            }
        }
        if let Some(actions) = &self.actions {
            let mut fields = BTreeSet::new();
            for action in actions {
                if !fields.insert(action.field.as_str()) {
                    return Err(invalid(
                        "drift.actions",
                        &format!("more than one action for field {}", action.field),
                    ));
                }
            }
        }
        if self.effective_compound_high_threshold() < 2 {
            return Err(invalid("drift.compound_high_threshold", "must be at least 2"));
        }
        Ok(())
    }
}
