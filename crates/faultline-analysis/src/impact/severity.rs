//! Downstream-count severity lookup.

use faultline_core::config::SeverityTier;
use faultline_core::models::Severity;

/// Ordered severity tiers, matched by inclusive lower bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityLadder {
    /// Highest `min_downstream` first.
    tiers: Vec<SeverityTier>,
}

impl SeverityLadder {
    pub fn new(mut tiers: Vec<SeverityTier>) -> Self {
        tiers.sort_by(|a, b| b.min_downstream.cmp(&a.min_downstream));
        Self { tiers }
    }

    /// Severity for `count` downstream assets.
    ///
    /// A count below every bound falls to the lowest tier.
    pub fn classify(&self, count: usize) -> Severity {
        self.tiers
            .iter()
            .find(|tier| count >= tier.min_downstream)
            .or_else(|| self.tiers.last())
            .map(|tier| tier.severity)
            .unwrap_or(Severity::Low)
    }

    pub fn tiers(&self) -> &[SeverityTier] {
        &self.tiers
    }
}
