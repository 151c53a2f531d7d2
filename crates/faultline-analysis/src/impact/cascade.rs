//! Cascade impact from a currently failing asset.

use faultline_core::config::ImpactConfig;
use faultline_core::errors::FaultlineResult;
use faultline_core::models::AssetSummary;
use faultline_core::traits::AssetGraph;

use super::severity::SeverityLadder;
use super::types::{CascadeResult, ImpactedAsset};
use crate::traversal::TraversalEngine;

/// Traverse downstream from `asset_id` and split the result into everything
/// reachable and what is already affected.
///
/// A source outside the cascade-source statuses is still analyzed; the
/// result reports `source_failing = false`.
pub fn cascade_impact<G: AssetGraph + ?Sized>(
    graph: &G,
    config: &ImpactConfig,
    ladder: &SeverityLadder,
    asset_id: &str,
) -> FaultlineResult<CascadeResult> {
    let max_hops = config.effective_max_hops();
    let edge_types = config.effective_edge_types();
    let affected_statuses = config.effective_affected_statuses();

    let traversal =
        TraversalEngine::new(graph).downstream(asset_id, max_hops, Some(&edge_types))?;

    let downstream: Vec<ImpactedAsset> = traversal.hits.iter().map(ImpactedAsset::from).collect();
    let currently_affected: Vec<ImpactedAsset> = downstream
        .iter()
        .filter(|impacted| affected_statuses.contains(&impacted.asset.status))
        .cloned()
        .collect();

    let source_failing = config
        .effective_cascade_source_statuses()
        .contains(&traversal.origin.status);
    let total_downstream = downstream.len();
    let severity = ladder.classify(total_downstream);
    let summary = summarize(
        &traversal.origin,
        source_failing,
        total_downstream,
        currently_affected.len(),
        traversal.max_depth_reached,
    );

    tracing::info!(
        source = %traversal.origin.id,
        total_downstream,
        currently_affected = currently_affected.len(),
        severity = %severity,
        "cascade impact computed"
    );

    Ok(CascadeResult {
        source: traversal.origin,
        source_failing,
        total_downstream,
        currently_affected_count: currently_affected.len(),
        currently_affected,
        downstream,
        impact_radius: traversal.max_depth_reached,
        severity,
        max_hops,
        truncated: traversal.truncated,
        summary,
    })
}

fn summarize(
    source: &AssetSummary,
    source_failing: bool,
    total: usize,
    affected: usize,
    radius: usize,
) -> String {
    let lead = if source_failing {
        format!("{} is {}", source.id, source.status)
    } else {
        format!("{} is {} and not an active failure", source.id, source.status)
    };
    if total == 0 {
        return format!("{lead}; no downstream assets depend on it.");
    }
    format!(
        "{lead}; {total} downstream asset(s) within {radius} hop(s), {affected} already affected."
    )
}
