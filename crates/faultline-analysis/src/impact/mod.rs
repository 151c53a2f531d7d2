//! Downstream impact: cascades, blast radius, and criticality ranking.

pub mod blast_radius;
pub mod cascade;
pub mod criticality;
pub mod redundancy;
pub mod severity;
pub mod types;

use faultline_core::config::{CascadeScope, ImpactConfig};
use faultline_core::errors::{AnalysisError, FaultlineResult};
use faultline_core::traits::AssetGraph;

pub use redundancy::RedundancyAdvisor;
pub use severity::SeverityLadder;
pub use types::{BlastRadiusResult, CascadeResult, CriticalityEntry, FailureCascade, ImpactedAsset};

/// Downstream analyzers sharing one graph handle and config.
pub struct ImpactAnalyzer<'a, G: AssetGraph + ?Sized> {
    graph: &'a G,
    config: &'a ImpactConfig,
    ladder: SeverityLadder,
}

impl<'a, G: AssetGraph + ?Sized> ImpactAnalyzer<'a, G> {
    /// Fails with `InvalidParameter` on a zero hop bound, an empty edge set,
    /// or a malformed lookup table, before any traversal runs.
    pub fn new(graph: &'a G, config: &'a ImpactConfig) -> FaultlineResult<Self> {
        config.validate().map_err(AnalysisError::invalid_config)?;
        Ok(Self {
            graph,
            config,
            ladder: SeverityLadder::new(config.effective_severity_tiers()),
        })
    }

    /// Downstream impact of a failing asset.
    pub fn cascade_impact(&self, asset_id: &str) -> FaultlineResult<CascadeResult> {
        cascade::cascade_impact(self.graph, self.config, &self.ladder, asset_id)
    }

    /// Hypothetical downstream impact of `asset_id` failing.
    pub fn blast_radius(&self, asset_id: &str) -> FaultlineResult<BlastRadiusResult> {
        blast_radius::compute_blast_radius(self.graph, self.config, &self.ladder, asset_id)
    }

    /// Every asset ranked by downstream count, largest first.
    pub fn rank_criticality(&self) -> FaultlineResult<Vec<CriticalityEntry>> {
        criticality::rank_criticality(self.graph, self.config, &self.ladder)
    }

    /// Active cascades from every asset in a cascade-source status.
    pub fn failure_cascades(&self) -> FaultlineResult<Vec<FailureCascade>> {
        criticality::failure_cascades(self.graph, self.config, &self.ladder)
    }

    /// Active cascades from failing sources of one asset class, such as
    /// network devices over `CONNECTS_TO` or power sources over `POWERS`.
    pub fn scoped_failure_cascades(
        &self,
        scope: &CascadeScope,
    ) -> FaultlineResult<Vec<FailureCascade>> {
        criticality::scoped_failure_cascades(self.graph, self.config, &self.ladder, scope)
    }
}
