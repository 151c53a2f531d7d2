//! ResultPublisher: synchronous dispatch to registered handlers.

use std::sync::Arc;

use super::handler::AnalysisHandler;
use super::report::AnalysisReport;

/// Synchronous publisher wrapping a list of handlers.
///
/// With no handlers registered, `publish` returns immediately.
#[derive(Default)]
pub struct ResultPublisher {
    handlers: Vec<Arc<dyn AnalysisHandler>>,
}

impl ResultPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler.
    pub fn register(&mut self, handler: Arc<dyn AnalysisHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Deliver a report to every handler in registration order.
    /// A handler that panics is logged and does not stop later handlers.
    pub fn publish(&self, report: AnalysisReport<'_>) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                dispatch(handler.as_ref(), report);
            }));
            if result.is_err() {
                tracing::warn!(
                    kind = report.kind(),
                    asset = report.asset_id().unwrap_or("-"),
                    "analysis handler panicked"
                );
            }
        }
    }
}

impl std::fmt::Debug for ResultPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultPublisher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

fn dispatch(handler: &dyn AnalysisHandler, report: AnalysisReport<'_>) {
    match report {
        AnalysisReport::RootCause(r) => handler.on_root_cause(r),
        AnalysisReport::Cascade(r) => handler.on_cascade(r),
        AnalysisReport::BlastRadius(r) => handler.on_blast_radius(r),
        AnalysisReport::Criticality(r) => handler.on_criticality(r),
        AnalysisReport::FailureCascades(r) => handler.on_failure_cascades(r),
        AnalysisReport::Drift(r) => handler.on_drift(r),
        AnalysisReport::DriftReport(r) => handler.on_drift_report(r),
    }
    handler.on_report(report);
}
