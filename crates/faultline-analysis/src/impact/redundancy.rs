//! Category-driven redundancy advice for single points of failure.

use faultline_core::config::{ImpactConfig, RedundancyRule};

use super::types::CriticalityEntry;

#[derive(Debug, Clone)]
pub struct RedundancyAdvisor {
    rules: Vec<RedundancyRule>,
    fallback: String,
}

impl RedundancyAdvisor {
    pub fn new(config: &ImpactConfig) -> Self {
        Self {
            rules: config.effective_redundancy_rules(),
            fallback: config.effective_redundancy_fallback(),
        }
    }

    /// Advice for `entry`, or `None` when it is not a single point of failure.
    pub fn recommend(&self, entry: &CriticalityEntry) -> Option<String> {
        if !entry.is_spof {
            return None;
        }
        let template = self
            .rules
            .iter()
            .find(|rule| rule.categories.contains(&entry.asset.category))
            .map_or(self.fallback.as_str(), |rule| rule.recommendation.as_str());
        Some(
            template
                .replace("{asset}", &entry.asset.id)
                .replace("{count}", &entry.downstream_count.to_string()),
        )
    }
}
