//! Borrowed view over any finished analysis result.

use serde::Serialize;

use crate::drift::{DriftRecord, DriftReport};
use crate::impact::{BlastRadiusResult, CascadeResult, CriticalityEntry, FailureCascade};
use crate::root_cause::RootCauseResult;

/// A finished analysis, tagged by kind for the wire:
/// `{"kind": "root_cause", "result": {...}}`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum AnalysisReport<'a> {
    RootCause(&'a RootCauseResult),
    Cascade(&'a CascadeResult),
    BlastRadius(&'a BlastRadiusResult),
    Criticality(&'a [CriticalityEntry]),
    FailureCascades(&'a [FailureCascade]),
    Drift(&'a DriftRecord),
    DriftReport(&'a DriftReport),
}

impl AnalysisReport<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RootCause(_) => "root_cause",
            Self::Cascade(_) => "cascade",
            Self::BlastRadius(_) => "blast_radius",
            Self::Criticality(_) => "criticality",
            Self::FailureCascades(_) => "failure_cascades",
            Self::Drift(_) => "drift",
            Self::DriftReport(_) => "drift_report",
        }
    }

    /// Asset the report is about, for single-asset kinds.
    pub fn asset_id(&self) -> Option<&str> {
        match self {
            Self::RootCause(r) => Some(&r.target.id),
            Self::Cascade(r) => Some(&r.source.id),
            Self::BlastRadius(r) => Some(&r.asset.id),
            Self::Drift(r) => Some(&r.asset_id),
            Self::Criticality(_) | Self::FailureCascades(_) | Self::DriftReport(_) => None,
        }
    }

    /// Render as JSON for the transport boundary.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
