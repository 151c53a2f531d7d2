//! Drift detection types.

use std::collections::BTreeMap;

use faultline_core::config::drift_detection_config::STATUS_FIELD;
use faultline_core::models::{Asset, Severity};
use serde::{Deserialize, Serialize};

/// Where an intended record came from in the GitOps repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRef {
    pub repo: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

/// Source-of-truth values for one asset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntendedConfig {
    pub asset_id: String,
    /// Field name → intended value. Fields absent here are not tracked.
    pub values: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceRef>,
}

impl IntendedConfig {
    pub fn new(asset_id: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    pub fn with_source(mut self, source: SourceRef) -> Self {
        self.source = Some(source);
        self
    }
}

/// Observed values for one asset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualState {
    pub asset_id: String,
    pub values: BTreeMap<String, String>,
}

impl ActualState {
    pub fn new(asset_id: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Observed state of a graph node: its attributes plus its status.
    pub fn from_asset(asset: &Asset) -> Self {
        let mut values = asset.attributes.clone();
        values.insert(STATUS_FIELD.to_string(), asset.status.as_str().to_string());
        Self {
            asset_id: asset.id.clone(),
            values,
        }
    }
}

/// A single field mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDrift {
    pub field: String,
    pub intended: String,
    /// `None` when the field was not reported at all.
    pub actual: Option<String>,
    pub severity: Severity,
}

/// Aggregate drift status of one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftStatus {
    InSync,
    Medium,
    High,
    Critical,
}

impl DriftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InSync => "in_sync",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for DriftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated remediation step. Never executed by detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemediationAction {
    pub action_id: String,
    /// Drifted field this action addresses.
    pub field: String,
    pub title: String,
    pub description: String,
    pub priority: Severity,
    pub automatable: bool,
}

/// Drift comparison result for one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftRecord {
    pub asset_id: String,
    pub status: DriftStatus,
    /// Mismatches in tracked-field order.
    pub drifts: Vec<FieldDrift>,
    /// One action per drift, in the same order.
    pub actions: Vec<RemediationAction>,
    /// Number of tracked fields actually compared.
    pub fields_checked: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceRef>,
}

impl DriftRecord {
    pub fn is_in_sync(&self) -> bool {
        self.status == DriftStatus::InSync
    }

    pub fn drift_for(&self, field: &str) -> Option<&FieldDrift> {
        self.drifts.iter().find(|d| d.field == field)
    }
}
