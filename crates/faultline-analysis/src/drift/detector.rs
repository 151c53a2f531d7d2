//! Table-driven field comparator.

use std::collections::BTreeSet;

use faultline_core::config::{DriftDetectionConfig, RemediationRule, TrackedField};
use faultline_core::errors::{AnalysisError, FaultlineResult};
use faultline_core::models::{AssetStatus, Severity};
use faultline_core::types::collections::FxHashMap;

use super::actions::{fallback_action, render_action};
use super::types::{ActualState, DriftRecord, DriftStatus, FieldDrift, IntendedConfig};

/// Compares intended and actual records field by field.
///
/// Built once from a config; holds only the lookup tables, so `detect` is a
/// pure function of its inputs.
#[derive(Debug, Clone)]
pub struct DriftDetector {
    fields: Vec<TrackedField>,
    rules: FxHashMap<String, RemediationRule>,
    failure_statuses: BTreeSet<AssetStatus>,
    compound_high_threshold: usize,
    unknown_sentinel: String,
}

impl DriftDetector {
    /// Fails with `InvalidParameter` on an empty field table, duplicate
    /// field names, or a compounding threshold below 2.
    pub fn new(config: &DriftDetectionConfig) -> FaultlineResult<Self> {
        config.validate().map_err(AnalysisError::invalid_config)?;
        let fields = config.effective_fields();
        let rules = config
            .effective_actions()
            .into_iter()
            .map(|rule| (rule.field.clone(), rule))
            .collect();
        Ok(Self {
            fields,
            rules,
            failure_statuses: config.effective_failure_statuses(),
            compound_high_threshold: config.effective_compound_high_threshold(),
            unknown_sentinel: config.effective_unknown_sentinel(),
        })
    }

    pub fn tracked_fields(&self) -> &[TrackedField] {
        &self.fields
    }

    /// Compare one asset's intended and actual records.
    ///
    /// Both records must name the same asset.
    pub fn detect(
        &self,
        intended: &IntendedConfig,
        actual: &ActualState,
    ) -> FaultlineResult<DriftRecord> {
        if intended.asset_id != actual.asset_id {
            return Err(AnalysisError::invalid_parameter(
                "actual.asset_id",
                format!(
                    "expected {}, got {}",
                    intended.asset_id, actual.asset_id
                ),
            ));
        }

        let mut drifts = Vec::new();
        let mut fields_checked = 0;
        for field in &self.fields {
            let Some(intended_value) = intended.values.get(&field.name) else {
                continue;
            };
            let actual_value = actual.values.get(&field.name);
            if actual_value.is_some_and(|v| *v == self.unknown_sentinel) {
                continue;
            }
            fields_checked += 1;
            if actual_value == Some(intended_value) {
                continue;
            }
            drifts.push(FieldDrift {
                field: field.name.clone(),
                intended: intended_value.clone(),
                actual: actual_value.cloned(),
                severity: self.field_severity(field, actual_value.map(String::as_str)),
            });
        }

        let actions = drifts
            .iter()
            .map(|drift| match self.rules.get(&drift.field) {
                Some(rule) => render_action(rule, &intended.asset_id, drift),
                None => fallback_action(&intended.asset_id, drift),
            })
            .collect();

        let status = aggregate_status(&drifts, self.compound_high_threshold);
        if status != DriftStatus::InSync {
            tracing::debug!(
                asset = %intended.asset_id,
                drifts = drifts.len(),
                status = %status,
                "drift detected"
            );
        }

        Ok(DriftRecord {
            asset_id: intended.asset_id.clone(),
            status,
            drifts,
            actions,
            fields_checked,
            source: intended.source.clone(),
        })
    }

    fn field_severity(&self, field: &TrackedField, actual: Option<&str>) -> Severity {
        let actual_is_failure = actual
            .and_then(AssetStatus::from_str_name)
            .is_some_and(|status| self.failure_statuses.contains(&status));
        match field.failure_severity {
            Some(severity) if actual_is_failure => severity,
            _ => field.severity,
        }
    }
}

/// Aggregate per-field severities into one status.
///
/// No drifts is `in_sync`; any critical, or at least `compound_high_threshold`
/// highs, is `critical`; a single high is `high`; anything else is `medium`.
/// Drifts without a high never compound, whatever the threshold.
pub fn aggregate_status(drifts: &[FieldDrift], compound_high_threshold: usize) -> DriftStatus {
    if drifts.is_empty() {
        return DriftStatus::InSync;
    }
    if drifts.iter().any(|d| d.severity == Severity::Critical) {
        return DriftStatus::Critical;
    }
    let highs = drifts.iter().filter(|d| d.severity == Severity::High).count();
    if highs > 0 && highs >= compound_high_threshold {
        DriftStatus::Critical
    } else if highs > 0 {
        DriftStatus::High
    } else {
        DriftStatus::Medium
    }
}
