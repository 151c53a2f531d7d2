//! Blast radius computation via downstream BFS.

use faultline_core::config::ImpactConfig;
use faultline_core::errors::FaultlineResult;
use faultline_core::traits::AssetGraph;

use super::severity::SeverityLadder;
use super::types::{BlastRadiusResult, ImpactedAsset};
use crate::traversal::TraversalEngine;

/// Compute the blast radius of `asset_id`.
///
/// Independent of the asset's current status: answers how many assets would
/// be affected if it failed.
pub fn compute_blast_radius<G: AssetGraph + ?Sized>(
    graph: &G,
    config: &ImpactConfig,
    ladder: &SeverityLadder,
    asset_id: &str,
) -> FaultlineResult<BlastRadiusResult> {
    let max_hops = config.effective_max_hops();
    let edge_types = config.effective_edge_types();

    let traversal =
        TraversalEngine::new(graph).downstream(asset_id, max_hops, Some(&edge_types))?;

    let downstream_count = traversal.len();
    let direct_dependents = traversal.at_hops(1).count();
    let impacted: Vec<ImpactedAsset> = traversal.hits.iter().map(ImpactedAsset::from).collect();

    Ok(BlastRadiusResult {
        asset: traversal.origin,
        impacted,
        downstream_count,
        direct_dependents,
        impact_radius: traversal.max_depth_reached,
        severity: ladder.classify(downstream_count),
        is_spof: downstream_count >= config.effective_spof_threshold(),
        max_hops,
        truncated: traversal.truncated,
    })
}
