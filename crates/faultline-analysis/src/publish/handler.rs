//! AnalysisHandler trait, all methods with no-op defaults.

use super::report::AnalysisReport;
use crate::drift::{DriftRecord, DriftReport};
use crate::impact::{BlastRadiusResult, CascadeResult, CriticalityEntry, FailureCascade};
use crate::root_cause::RootCauseResult;

/// Receives finished analysis results.
///
/// Handlers only override the kinds they care about. `on_report` is called
/// after the kind-specific method for every result, which suits transports
/// that forward everything (e.g. a WebSocket broadcaster).
pub trait AnalysisHandler: Send + Sync {
    fn on_root_cause(&self, _result: &RootCauseResult) {}
    fn on_cascade(&self, _result: &CascadeResult) {}
    fn on_blast_radius(&self, _result: &BlastRadiusResult) {}
    fn on_criticality(&self, _ranking: &[CriticalityEntry]) {}
    fn on_failure_cascades(&self, _cascades: &[FailureCascade]) {}
    fn on_drift(&self, _record: &DriftRecord) {}
    fn on_drift_report(&self, _report: &DriftReport) {}

    fn on_report(&self, _report: AnalysisReport<'_>) {}
}
