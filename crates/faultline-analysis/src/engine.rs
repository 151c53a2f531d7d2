//! DiagnosticEngine: one entry point for every analysis.

use std::collections::BTreeSet;
use std::sync::Arc;

use faultline_core::config::{CascadeScope, FaultlineConfig};
use faultline_core::errors::FaultlineResult;
use faultline_core::models::{Direction, EdgeType};
use faultline_core::traits::AssetGraph;

use crate::drift::report::build_report;
use crate::drift::{ActualState, DriftDetector, DriftRecord, DriftReport, IntendedConfig};
use crate::impact::{
    BlastRadiusResult, CascadeResult, CriticalityEntry, FailureCascade, ImpactAnalyzer,
};
use crate::publish::{AnalysisHandler, AnalysisReport, ResultPublisher};
use crate::root_cause::{RootCauseAnalyzer, RootCauseResult};
use crate::traversal::{TraversalEngine, TraversalResult};

/// Owns the graph handle, a validated config, and the publisher.
///
/// Holds no analysis state between calls, so one engine can serve
/// concurrent requests.
pub struct DiagnosticEngine<G: AssetGraph> {
    graph: Arc<G>,
    config: FaultlineConfig,
    drift: DriftDetector,
    publisher: ResultPublisher,
}

impl<G: AssetGraph> DiagnosticEngine<G> {
    /// Validate `config` and build the engine.
    pub fn new(graph: Arc<G>, config: FaultlineConfig) -> FaultlineResult<Self> {
        config.validate()?;
        let drift = DriftDetector::new(&config.drift)?;
        Ok(Self {
            graph,
            config,
            drift,
            publisher: ResultPublisher::new(),
        })
    }

    /// Engine with the compiled default config.
    pub fn with_defaults(graph: Arc<G>) -> FaultlineResult<Self> {
        Self::new(graph, FaultlineConfig::default())
    }

    pub fn register_handler(&mut self, handler: Arc<dyn AnalysisHandler>) {
        self.publisher.register(handler);
    }

    pub fn config(&self) -> &FaultlineConfig {
        &self.config
    }

    pub fn graph(&self) -> &Arc<G> {
        &self.graph
    }

    pub fn publisher(&self) -> &ResultPublisher {
        &self.publisher
    }

    /// Raw bounded traversal. Not published.
    pub fn traverse(
        &self,
        start_id: &str,
        direction: Direction,
        max_hops: usize,
        edge_types: Option<&BTreeSet<EdgeType>>,
    ) -> FaultlineResult<TraversalResult> {
        TraversalEngine::new(self.graph.as_ref()).traverse(
            start_id, direction, max_hops, edge_types,
        )
    }

    pub fn find_root_cause(&self, asset_id: &str) -> FaultlineResult<RootCauseResult> {
        let result = self.root_cause()?.analyze(asset_id)?;
        self.publisher.publish(AnalysisReport::RootCause(&result));
        Ok(result)
    }

    /// Root cause of every failing asset. Each result is published.
    pub fn analyze_all_failing(&self) -> FaultlineResult<Vec<RootCauseResult>> {
        let results = self.root_cause()?.analyze_all_failing()?;
        for result in &results {
            self.publisher.publish(AnalysisReport::RootCause(result));
        }
        Ok(results)
    }

    pub fn cascade_impact(&self, asset_id: &str) -> FaultlineResult<CascadeResult> {
        let result = self.impact()?.cascade_impact(asset_id)?;
        self.publisher.publish(AnalysisReport::Cascade(&result));
        Ok(result)
    }

    pub fn blast_radius(&self, asset_id: &str) -> FaultlineResult<BlastRadiusResult> {
        let result = self.impact()?.blast_radius(asset_id)?;
        self.publisher.publish(AnalysisReport::BlastRadius(&result));
        Ok(result)
    }

    pub fn rank_criticality(&self) -> FaultlineResult<Vec<CriticalityEntry>> {
        let ranking = self.impact()?.rank_criticality()?;
        self.publisher.publish(AnalysisReport::Criticality(&ranking));
        Ok(ranking)
    }

    pub fn failure_cascades(&self) -> FaultlineResult<Vec<FailureCascade>> {
        let cascades = self.impact()?.failure_cascades()?;
        self.publisher.publish(AnalysisReport::FailureCascades(&cascades));
        Ok(cascades)
    }

    /// Active cascades restricted to one asset class. Published as failure cascades.
    pub fn scoped_failure_cascades(
        &self,
        scope: &CascadeScope,
    ) -> FaultlineResult<Vec<FailureCascade>> {
        let cascades = self.impact()?.scoped_failure_cascades(scope)?;
        self.publisher.publish(AnalysisReport::FailureCascades(&cascades));
        Ok(cascades)
    }

    pub fn detect_drift(
        &self,
        intended: &IntendedConfig,
        actual: &ActualState,
    ) -> FaultlineResult<DriftRecord> {
        let record = self.drift.detect(intended, actual)?;
        self.publisher.publish(AnalysisReport::Drift(&record));
        Ok(record)
    }

    pub fn drift_report(
        &self,
        intended: &[IntendedConfig],
        actual: &[ActualState],
    ) -> FaultlineResult<DriftReport> {
        let report = build_report(&self.drift, intended, actual)?;
        self.publisher.publish(AnalysisReport::DriftReport(&report));
        Ok(report)
    }

    fn root_cause(&self) -> FaultlineResult<RootCauseAnalyzer<'_, G>> {
        RootCauseAnalyzer::new(self.graph.as_ref(), &self.config.root_cause)
    }

    fn impact(&self) -> FaultlineResult<ImpactAnalyzer<'_, G>> {
        ImpactAnalyzer::new(self.graph.as_ref(), &self.config.impact)
    }
}
