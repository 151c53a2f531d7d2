//! Fleet-wide analyses: criticality ranking and active failure cascades.

use std::collections::BTreeSet;

use faultline_core::config::{CascadeScope, ImpactConfig};
use faultline_core::errors::{AnalysisError, FaultlineResult};
use faultline_core::models::team::TEAM_CATEGORY;
use faultline_core::models::{Asset, AssetStatus};
use faultline_core::traits::AssetGraph;
use rayon::prelude::*;

use super::blast_radius::compute_blast_radius;
use super::cascade::cascade_impact;
use super::redundancy::RedundancyAdvisor;
use super::severity::SeverityLadder;
use super::types::{CriticalityEntry, FailureCascade};

/// Rank every non-team asset by blast radius.
///
/// Sorted by downstream count descending, then id. Truncated to
/// `ranking_limit` when set. Single points of failure carry redundancy advice.
pub fn rank_criticality<G: AssetGraph + ?Sized>(
    graph: &G,
    config: &ImpactConfig,
    ladder: &SeverityLadder,
) -> FaultlineResult<Vec<CriticalityEntry>> {
    let all_statuses: BTreeSet<AssetStatus> = AssetStatus::ALL.into_iter().collect();
    let assets: Vec<Asset> = graph
        .find_nodes_by_status(&all_statuses)?
        .into_iter()
        .filter(|asset| asset.category != TEAM_CATEGORY)
        .collect();

    let mut entries: Vec<CriticalityEntry> = assets
        .par_iter()
        .map(|asset| {
            skip_missing(compute_blast_radius(graph, config, ladder, &asset.id))
                .map(|blast| blast.as_ref().map(CriticalityEntry::from))
        })
        .collect::<FaultlineResult<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    entries.sort_by(|a, b| {
        b.downstream_count
            .cmp(&a.downstream_count)
            .then(a.asset.id.cmp(&b.asset.id))
    });
    if let Some(limit) = config.ranking_limit {
        entries.truncate(limit);
    }
    let advisor = RedundancyAdvisor::new(config);
    for entry in &mut entries {
        entry.recommendation = advisor.recommend(entry);
    }

    tracing::info!(
        ranked = entries.len(),
        spofs = entries.iter().filter(|e| e.is_spof).count(),
        "criticality ranking computed"
    );
    Ok(entries)
}

/// Active cascades from every asset in a cascade-source status.
///
/// Only cascades with at least one affected downstream asset are returned,
/// largest first, then by source id.
pub fn failure_cascades<G: AssetGraph + ?Sized>(
    graph: &G,
    config: &ImpactConfig,
    ladder: &SeverityLadder,
) -> FaultlineResult<Vec<FailureCascade>> {
    let sources = graph.find_nodes_by_status(&config.effective_cascade_source_statuses())?;
    collect_cascades(graph, config, ladder, &sources)
}

/// Active cascades from failing sources of the scope's categories, following
/// only the scope's edge types.
///
/// Same ordering and filtering as [`failure_cascades`].
pub fn scoped_failure_cascades<G: AssetGraph + ?Sized>(
    graph: &G,
    config: &ImpactConfig,
    ladder: &SeverityLadder,
    scope: &CascadeScope,
) -> FaultlineResult<Vec<FailureCascade>> {
    scope.validate().map_err(AnalysisError::invalid_config)?;
    let scoped = ImpactConfig {
        max_hops: Some(scope.max_hops.unwrap_or(config.effective_max_hops())),
        edge_types: Some(scope.edge_types.clone()),
        cascade_source_statuses: Some(scope.source_statuses.clone()),
        ..config.clone()
    };
    let sources: Vec<Asset> = graph
        .find_nodes_by_status(&scope.source_statuses)?
        .into_iter()
        .filter(|asset| scope.source_categories.contains(&asset.category))
        .collect();

    let cascades = collect_cascades(graph, &scoped, ladder, &sources)?;
    tracing::info!(
        scope = %scope.name,
        sources = sources.len(),
        cascades = cascades.len(),
        "scoped failure cascades computed"
    );
    Ok(cascades)
}

fn collect_cascades<G: AssetGraph + ?Sized>(
    graph: &G,
    config: &ImpactConfig,
    ladder: &SeverityLadder,
    sources: &[Asset],
) -> FaultlineResult<Vec<FailureCascade>> {
    let mut cascades: Vec<FailureCascade> = sources
        .par_iter()
        .map(|asset| {
            skip_missing(cascade_impact(graph, config, ladder, &asset.id)).map(|cascade| {
                cascade.and_then(|cascade| {
                    if cascade.currently_affected.is_empty() {
                        return None;
                    }
                    let affected_count = cascade.currently_affected_count;
                    Some(FailureCascade {
                        source: cascade.source,
                        affected: cascade.currently_affected,
                        affected_count,
                        severity: ladder.classify(affected_count),
                    })
                })
            })
        })
        .collect::<FaultlineResult<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    cascades.sort_by(|a, b| {
        b.affected_count
            .cmp(&a.affected_count)
            .then(a.source.id.cmp(&b.source.id))
    });
    Ok(cascades)
}

/// Treat an asset removed mid-scan as absent rather than failing the batch.
fn skip_missing<T>(result: FaultlineResult<T>) -> FaultlineResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(AnalysisError::NodeNotFound { id }) => {
            tracing::warn!(asset = %id, "asset disappeared during scan, skipping");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
