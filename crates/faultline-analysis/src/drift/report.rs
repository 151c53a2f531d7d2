//! Fleet drift report: every paired asset compared in parallel.

use std::collections::BTreeMap;

use faultline_core::errors::FaultlineResult;
use faultline_core::types::collections::{FxHashMap, FxHashSet};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::detector::DriftDetector;
use super::types::{ActualState, DriftRecord, DriftStatus, IntendedConfig};

/// Counts across a drift report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftSummary {
    /// Assets with both an intended and an actual record.
    pub total_assets: usize,
    pub drifted_assets: usize,
    pub in_sync_assets: usize,
    pub critical_assets: usize,
    /// Drifted share of compared assets, 0.0–100.0.
    pub drift_percentage: f64,
    pub by_status: BTreeMap<DriftStatus, usize>,
    /// Field name → number of assets drifting on it.
    pub by_field: BTreeMap<String, usize>,
}

/// Drift across a fleet of assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftReport {
    /// Records with at least one drift, most severe first, then by id.
    pub drifted: Vec<DriftRecord>,
    /// Intended records with no matching actual state.
    pub missing_actual: Vec<String>,
    /// Actual states with no intended record.
    pub untracked: Vec<String>,
    pub summary: DriftSummary,
}

/// Pair records by asset id and compare every pair.
///
/// Duplicate ids keep the first record seen.
pub fn build_report(
    detector: &DriftDetector,
    intended: &[IntendedConfig],
    actual: &[ActualState],
) -> FaultlineResult<DriftReport> {
    let mut actual_by_id: FxHashMap<&str, &ActualState> = FxHashMap::default();
    for state in actual {
        if actual_by_id.contains_key(state.asset_id.as_str()) {
            tracing::warn!(asset = %state.asset_id, "duplicate actual state ignored");
            continue;
        }
        actual_by_id.insert(state.asset_id.as_str(), state);
    }

    let mut pairs: Vec<(&IntendedConfig, &ActualState)> = Vec::new();
    let mut missing_actual = Vec::new();
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for config in intended {
        if !seen.insert(config.asset_id.as_str()) {
            tracing::warn!(asset = %config.asset_id, "duplicate intended config ignored");
            continue;
        }
        match actual_by_id.get(config.asset_id.as_str()) {
            Some(state) => pairs.push((config, *state)),
            None => missing_actual.push(config.asset_id.clone()),
        }
    }
    let mut untracked: Vec<String> = actual_by_id
        .keys()
        .filter(|id| !seen.contains(*id))
        .map(|id| id.to_string())
        .collect();
    missing_actual.sort();
    untracked.sort();

    let records: Vec<DriftRecord> = pairs
        .par_iter()
        .map(|(config, state)| detector.detect(config, state))
        .collect::<FaultlineResult<_>>()?;

    let mut summary = DriftSummary {
        total_assets: records.len(),
        ..DriftSummary::default()
    };
    for record in &records {
        *summary.by_status.entry(record.status).or_default() += 1;
        for drift in &record.drifts {
            *summary.by_field.entry(drift.field.clone()).or_default() += 1;
        }
    }
    summary.in_sync_assets = summary.by_status.get(&DriftStatus::InSync).copied().unwrap_or(0);
    summary.drifted_assets = summary.total_assets - summary.in_sync_assets;
    summary.critical_assets = summary
        .by_status
        .get(&DriftStatus::Critical)
        .copied()
        .unwrap_or(0);
    if summary.total_assets > 0 {
        summary.drift_percentage =
            summary.drifted_assets as f64 / summary.total_assets as f64 * 100.0;
    }

    let mut drifted: Vec<DriftRecord> = records.into_iter().filter(|r| !r.is_in_sync()).collect();
    drifted.sort_by(|a, b| b.status.cmp(&a.status).then(a.asset_id.cmp(&b.asset_id)));

    tracing::info!(
        total = summary.total_assets,
        drifted = summary.drifted_assets,
        critical = summary.critical_assets,
        missing_actual = missing_actual.len(),
        untracked = untracked.len(),
        "drift report built"
    );

    Ok(DriftReport {
        drifted,
        missing_actual,
        untracked,
        summary,
    })
}
