//! Upstream root-cause search.

use std::collections::BTreeSet;

use faultline_core::config::RootCauseConfig;
use faultline_core::errors::{AnalysisError, FaultlineResult};
use faultline_core::models::{Direction, EdgeType, Team};
use faultline_core::traits::AssetGraph;
use rayon::prelude::*;

use super::narrative;
use super::types::{ChainLink, RootCause, RootCauseOutcome, RootCauseResult, UpstreamFailure};
use crate::traversal::{TraversalEngine, TraversalHit, TraversalResult};

/// Finds the nearest failing upstream assets of a failing asset.
pub struct RootCauseAnalyzer<'a, G: AssetGraph + ?Sized> {
    graph: &'a G,
    config: &'a RootCauseConfig,
}

impl<'a, G: AssetGraph + ?Sized> RootCauseAnalyzer<'a, G> {
    /// Fails with `InvalidParameter` on a zero hop bound or an empty
    /// status or edge set, before any traversal runs.
    pub fn new(graph: &'a G, config: &'a RootCauseConfig) -> FaultlineResult<Self> {
        config.validate().map_err(AnalysisError::invalid_config)?;
        Ok(Self { graph, config })
    }

    /// Analyze one asset.
    ///
    /// Failing upstream assets at the smallest hop distance are co-primary
    /// causes. With none inside the bound the target is reported as an
    /// isolated failure.
    pub fn analyze(&self, asset_id: &str) -> FaultlineResult<RootCauseResult> {
        let max_hops = self.config.effective_max_hops();
        let failure_statuses = self.config.effective_failure_statuses();
        let edge_types = self.config.effective_edge_types();

        let traversal = TraversalEngine::new(self.graph).upstream(
            asset_id,
            max_hops,
            Some(&edge_types),
        )?;
        let target = traversal.origin.clone();

        let failing: Vec<&TraversalHit> = traversal
            .hits
            .iter()
            .filter(|hit| failure_statuses.contains(&hit.asset.status))
            .collect();

        let result = match failing.iter().map(|hit| hit.hops).min() {
            None => {
                let cause = RootCause {
                    asset: target.clone(),
                    hops: 0,
                    chain: vec![ChainLink {
                        asset: target.clone(),
                        hops: 0,
                        edge_to_next: None,
                    }],
                    team: resolve_team(self.graph, &target.id)?,
                };
                RootCauseResult {
                    outcome: RootCauseOutcome::Isolated,
                    primary_causes: vec![cause],
                    other_upstream_failures: Vec::new(),
                    severity: target.status.incident_severity(),
                    explanation: narrative::isolated_explanation(&target, max_hops),
                    analysis: narrative::isolated_analysis(
                        &target,
                        max_hops,
                        &edge_types,
                        traversal.truncated,
                    ),
                    max_hops,
                    upstream_examined: traversal.len(),
                    truncated: traversal.truncated,
                    target,
                }
            }
            Some(nearest) => {
                let mut primary_hits: Vec<&TraversalHit> = failing
                    .iter()
                    .copied()
                    .filter(|hit| hit.hops == nearest)
                    .collect();
                primary_hits.sort_by(|a, b| a.id().cmp(b.id()));

                let mut primary_causes = Vec::with_capacity(primary_hits.len());
                for hit in primary_hits {
                    primary_causes.push(RootCause {
                        asset: hit.asset.summary(),
                        hops: hit.hops,
                        chain: build_chain(&traversal, hit)?,
                        team: resolve_team(self.graph, hit.id())?,
                    });
                }

                let mut other_upstream_failures: Vec<UpstreamFailure> = failing
                    .iter()
                    .filter(|hit| hit.hops != nearest)
                    .map(|hit| UpstreamFailure {
                        asset: hit.asset.summary(),
                        hops: hit.hops,
                    })
                    .collect();
                other_upstream_failures
                    .sort_by(|a, b| a.hops.cmp(&b.hops).then(a.asset.id.cmp(&b.asset.id)));

                RootCauseResult {
                    outcome: RootCauseOutcome::Upstream,
                    severity: target.status.incident_severity(),
                    explanation: narrative::upstream_explanation(&target, &primary_causes),
                    analysis: narrative::upstream_analysis(
                        &target,
                        &primary_causes,
                        &other_upstream_failures,
                        traversal.len(),
                    ),
                    primary_causes,
                    other_upstream_failures,
                    max_hops,
                    upstream_examined: traversal.len(),
                    truncated: traversal.truncated,
                    target,
                }
            }
        };

        tracing::info!(
            target_asset = %result.target.id,
            outcome = ?result.outcome,
            primary = ?result.primary_ids(),
            severity = %result.severity,
            "root cause analysis complete"
        );
        Ok(result)
    }

    /// Analyze every asset currently in a failure status, ordered by id.
    ///
    /// Assets removed from the graph between listing and analysis are skipped.
    pub fn analyze_all_failing(&self) -> FaultlineResult<Vec<RootCauseResult>> {
        let failing = self
            .graph
            .find_nodes_by_status(&self.config.effective_failure_statuses())?;

        let results: Vec<Option<RootCauseResult>> = failing
            .par_iter()
            .map(|asset| match self.analyze(&asset.id) {
                Ok(result) => Ok(Some(result)),
                Err(AnalysisError::NodeNotFound { id }) => {
                    tracing::warn!(asset = %id, "asset disappeared during analysis, skipping");
                    Ok(None)
                }
                Err(e) => Err(e),
            })
            .collect::<FaultlineResult<_>>()?;

        let mut results: Vec<RootCauseResult> = results.into_iter().flatten().collect();
        results.sort_by(|a, b| a.target.id.cmp(&b.target.id));
        Ok(results)
    }
}

/// Chain from `root` down to the traversal origin, root first.
fn build_chain(
    traversal: &TraversalResult,
    root: &TraversalHit,
) -> FaultlineResult<Vec<ChainLink>> {
    let path = traversal
        .path_to(root.id())
        .ok_or_else(|| AnalysisError::node_not_found(root.id()))?;

    let mut chain: Vec<ChainLink> = path
        .iter()
        .rev()
        .map(|hit| ChainLink {
            asset: hit.asset.summary(),
            hops: hit.hops,
            edge_to_next: hit.via(),
        })
        .collect();
    chain.push(ChainLink {
        asset: traversal.origin.clone(),
        hops: 0,
        edge_to_next: None,
    });
    Ok(chain)
}

/// Owning team via an outgoing `OWNED_BY` edge. The lowest team id wins when
/// there are several.
pub fn resolve_team<G: AssetGraph + ?Sized>(
    graph: &G,
    asset_id: &str,
) -> FaultlineResult<Option<Team>> {
    let owned_by: BTreeSet<EdgeType> = [EdgeType::OwnedBy].into_iter().collect();
    let team = graph
        .get_neighbors(asset_id, Direction::Downstream, Some(&owned_by))?
        .iter()
        .filter_map(|neighbor| Team::from_asset(&neighbor.node))
        .min_by(|a, b| a.name.cmp(&b.name));
    Ok(team)
}
