//! Impact analysis types.

use faultline_core::models::{AssetSummary, EdgeType, Severity};
use serde::{Deserialize, Serialize};

use crate::traversal::TraversalHit;

/// An asset reached downstream of a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactedAsset {
    pub asset: AssetSummary,
    pub hops: usize,
    /// Edge type by which the impact arrives.
    pub via: Option<EdgeType>,
    /// The upstream asset the impact arrives from.
    pub parent: String,
}

impl From<&TraversalHit> for ImpactedAsset {
    fn from(hit: &TraversalHit) -> Self {
        Self {
            asset: hit.asset.summary(),
            hops: hit.hops,
            via: hit.via(),
            parent: hit.parent.clone(),
        }
    }
}

/// Downstream impact of an asset that is currently failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeResult {
    pub source: AssetSummary,
    /// Whether the source is in a cascade-source status.
    pub source_failing: bool,
    /// Every downstream asset within the hop bound.
    pub downstream: Vec<ImpactedAsset>,
    pub total_downstream: usize,
    /// Downstream assets whose own status already shows failure or degradation.
    pub currently_affected: Vec<ImpactedAsset>,
    pub currently_affected_count: usize,
    /// Largest hop distance reached.
    pub impact_radius: usize,
    pub severity: Severity,
    pub max_hops: usize,
    pub truncated: bool,
    pub summary: String,
}

/// Hypothetical downstream impact of any asset failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlastRadiusResult {
    pub asset: AssetSummary,
    pub impacted: Vec<ImpactedAsset>,
    pub downstream_count: usize,
    /// Downstream assets at exactly one hop.
    pub direct_dependents: usize,
    pub impact_radius: usize,
    pub severity: Severity,
    pub is_spof: bool,
    pub max_hops: usize,
    pub truncated: bool,
}

/// One row of the criticality ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalityEntry {
    pub asset: AssetSummary,
    pub downstream_count: usize,
    pub direct_dependents: usize,
    pub impact_radius: usize,
    pub severity: Severity,
    pub is_spof: bool,
    /// Redundancy advice, set for single points of failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl From<&BlastRadiusResult> for CriticalityEntry {
    fn from(blast: &BlastRadiusResult) -> Self {
        Self {
            asset: blast.asset.clone(),
            downstream_count: blast.downstream_count,
            direct_dependents: blast.direct_dependents,
            impact_radius: blast.impact_radius,
            severity: blast.severity,
            is_spof: blast.is_spof,
            recommendation: None,
        }
    }
}

/// An active cascade: a failing source and the downstream assets already affected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureCascade {
    pub source: AssetSummary,
    pub affected: Vec<ImpactedAsset>,
    pub affected_count: usize,
    pub severity: Severity,
}
