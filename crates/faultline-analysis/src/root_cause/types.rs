//! Root-cause result types.

use faultline_core::models::{AssetSummary, EdgeType, Severity, Team};
use serde::{Deserialize, Serialize};

/// Whether a failure came from upstream or started at the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootCauseOutcome {
    /// One or more failing upstream assets were found within the hop bound.
    Upstream,
    /// No failing upstream asset was found; the target itself is the cause.
    Isolated,
}

/// One hop of a failure chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainLink {
    pub asset: AssetSummary,
    /// Hops upstream of the target (0 for the target itself).
    pub hops: usize,
    /// Edge type leading from this asset to the next link. `None` on the
    /// last link, which is always the target.
    pub edge_to_next: Option<EdgeType>,
}

/// A primary root cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootCause {
    pub asset: AssetSummary,
    pub hops: usize,
    /// Chain from this root cause down to the target, root first.
    pub chain: Vec<ChainLink>,
    /// Owning team, when the asset has an `OWNED_BY` edge to a team node.
    pub team: Option<Team>,
}

/// A failing upstream asset farther away than the primary causes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamFailure {
    pub asset: AssetSummary,
    pub hops: usize,
}

/// One piece of evidence behind a conclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    pub category: String,
    pub finding: String,
    pub details: String,
}

/// Step-by-step rendering of how a conclusion was reached.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    pub thought_process: Vec<String>,
    pub evidence_examined: Vec<Evidence>,
    pub reasoning: Vec<String>,
    pub conclusion: String,
    pub recommendation: String,
}

/// Result of upstream root-cause search for one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootCauseResult {
    pub target: AssetSummary,
    pub outcome: RootCauseOutcome,
    /// Co-primary causes ordered by id. For an isolated failure this holds
    /// the target alone, at hop 0.
    pub primary_causes: Vec<RootCause>,
    /// Failing upstream assets that are not primary, by distance then id.
    pub other_upstream_failures: Vec<UpstreamFailure>,
    /// Severity implied by the target's own status.
    pub severity: Severity,
    pub explanation: String,
    pub analysis: DetailedAnalysis,
    /// Upstream hop bound used for the search.
    pub max_hops: usize,
    /// Number of upstream assets examined.
    pub upstream_examined: usize,
    /// The hop bound cut the search short.
    pub truncated: bool,
}

impl RootCauseResult {
    pub fn is_isolated(&self) -> bool {
        self.outcome == RootCauseOutcome::Isolated
    }

    /// Ids of the primary causes.
    pub fn primary_ids(&self) -> Vec<&str> {
        self.primary_causes
            .iter()
            .map(|cause| cause.asset.id.as_str())
            .collect()
    }
}
