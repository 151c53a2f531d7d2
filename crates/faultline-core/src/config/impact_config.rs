//! Cascade, blast-radius, and criticality configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{defaults, invalid, non_empty};
use crate::errors::ConfigError;
use crate::models::{AssetStatus, EdgeType, Severity};

/// One row of the downstream-count severity lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityTier {
    /// Inclusive lower bound on the downstream count.
    pub min_downstream: usize,
    pub severity: Severity,
}

/// Redundancy advice attached to single points of failure of the listed categories.
///
/// `recommendation` may reference `{asset}` and `{count}` (downstream count).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedundancyRule {
    pub categories: BTreeSet<String>,
    pub recommendation: String,
}

impl RedundancyRule {
    pub fn new(categories: &[&str], recommendation: &str) -> Self {
        Self {
            categories: categories.iter().map(|c| c.to_string()).collect(),
            recommendation: recommendation.to_string(),
        }
    }
}

/// Restricts a failure-cascade scan to one class of source asset and the
/// edge types that class propagates failures along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeScope {
    pub name: String,
    pub source_categories: BTreeSet<String>,
    pub source_statuses: BTreeSet<AssetStatus>,
    pub edge_types: BTreeSet<EdgeType>,
    /// Falls back to the impact hop bound when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hops: Option<usize>,
}

impl CascadeScope {
    /// Failed network devices and the assets they connect to.
    pub fn network() -> Self {
        Self {
            name: "network".to_string(),
            source_categories: ["NetworkSwitch", "Router", "Firewall", "Gateway"]
                .into_iter()
                .map(String::from)
                .collect(),
            source_statuses: [AssetStatus::Offline, AssetStatus::Error].into_iter().collect(),
            edge_types: [EdgeType::ConnectsTo].into_iter().collect(),
            max_hops: Some(defaults::DEFAULT_SCOPED_CASCADE_MAX_HOPS),
        }
    }

    /// Disrupted power sources and the equipment they power.
    pub fn power() -> Self {
        Self {
            name: "power".to_string(),
            source_categories: ["UPS", "PowerSupply", "PDU"]
                .into_iter()
                .map(String::from)
                .collect(),
            source_statuses: [
                AssetStatus::Offline,
                AssetStatus::Error,
                AssetStatus::Failed,
                AssetStatus::Warning,
            ]
            .into_iter()
            .collect(),
            edge_types: [EdgeType::Powers].into_iter().collect(),
            max_hops: Some(defaults::DEFAULT_SCOPED_CASCADE_MAX_HOPS),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(invalid("cascade_scope.name", "must not be empty"));
        }
        if self.max_hops == Some(0) {
            return Err(invalid("cascade_scope.max_hops", "must be at least 1"));
        }
        if self.source_categories.is_empty() {
            return Err(invalid("cascade_scope.source_categories", "must not be empty"));
        }
        if self.source_statuses.is_empty() {
            return Err(invalid("cascade_scope.source_statuses", "must not be empty"));
        }
        if self.edge_types.is_empty() {
            return Err(invalid("cascade_scope.edge_types", "must not be empty"));
        }
        Ok(())
    }
}

/// Configuration for the downstream impact analyzers.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ImpactConfig {
    /// Downstream hop bound. Default: 5.
    pub max_hops: Option<usize>,
    /// Dependency edge types followed downstream.
    pub edge_types: Option<BTreeSet<EdgeType>>,
    /// Statuses counted as "currently affected" in a cascade.
    pub affected_statuses: Option<BTreeSet<AssetStatus>>,
    /// Statuses that make an asset the source of an active failure cascade.
    pub cascade_source_statuses: Option<BTreeSet<AssetStatus>>,
    /// Downstream-count severity lookup.
    pub severity_tiers: Option<Vec<SeverityTier>>,
    /// Downstream count at which an asset is flagged as a single point of failure. Default: 4.
    pub spof_threshold: Option<usize>,
    /// Maximum entries returned by criticality ranking. Default: unlimited.
    pub ranking_limit: Option<usize>,
    /// Category → redundancy advice for single points of failure.
    pub redundancy_rules: Option<Vec<RedundancyRule>>,
    /// Advice for a single point of failure no rule matches.
    pub redundancy_fallback: Option<String>,
}

impl ImpactConfig {
    /// Returns the effective hop bound, defaulting to 5.
    pub fn effective_max_hops(&self) -> usize {
        self.max_hops.unwrap_or(defaults::DEFAULT_IMPACT_MAX_HOPS)
    }

    pub fn effective_edge_types(&self) -> BTreeSet<EdgeType> {
        self.edge_types
            .clone()
            .unwrap_or_else(|| defaults::DEFAULT_IMPACT_EDGE_TYPES.iter().copied().collect())
    }

    pub fn effective_affected_statuses(&self) -> BTreeSet<AssetStatus> {
        self.affected_statuses
            .clone()
            .unwrap_or_else(|| defaults::DEFAULT_AFFECTED_STATUSES.iter().copied().collect())
    }

    pub fn effective_cascade_source_statuses(&self) -> BTreeSet<AssetStatus> {
        self.cascade_source_statuses.clone().unwrap_or_else(|| {
            defaults::DEFAULT_CASCADE_SOURCE_STATUSES
                .iter()
                .copied()
                .collect()
        })
    }

    pub fn effective_severity_tiers(&self) -> Vec<SeverityTier> {
        self.severity_tiers.clone().unwrap_or_else(|| {
            defaults::DEFAULT_SEVERITY_TIERS
                .iter()
                .map(|&(min_downstream, severity)| SeverityTier {
                    min_downstream,
                    severity,
                })
                .collect()
        })
    }

    /// Returns the effective SPOF threshold, defaulting to 4.
    pub fn effective_spof_threshold(&self) -> usize {
        self.spof_threshold.unwrap_or(defaults::DEFAULT_SPOF_THRESHOLD)
    }

    /// The default category → redundancy advice table.
    pub fn default_redundancy_rules() -> Vec<RedundancyRule> {
        vec![
            RedundancyRule::new(&["UPS", "PowerSupply"], "Add redundant power source"),
            RedundancyRule::new(&["Router", "NetworkSwitch"], "Implement network redundancy"),
        ]
    }

    pub fn effective_redundancy_rules(&self) -> Vec<RedundancyRule> {
        self.redundancy_rules
            .clone()
            .unwrap_or_else(Self::default_redundancy_rules)
    }

    pub fn effective_redundancy_fallback(&self) -> String {
        self.redundancy_fallback
            .clone()
            .unwrap_or_else(|| defaults::DEFAULT_REDUNDANCY_FALLBACK.to_string())
    }

    /// Reject a zero hop bound, an empty edge set, and malformed lookup tables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.effective_max_hops() == 0 {
            return Err(invalid("impact.max_hops", "must be at least 1"));
        }
        non_empty(&self.edge_types, "impact.edge_types")?;
        non_empty(&self.cascade_source_statuses, "impact.cascade_source_statuses")?;
        if let Some(tiers) = &self.severity_tiers {
            if tiers.is_empty() {
                return Err(invalid("impact.severity_tiers", "must not be empty"));
            }
            let mut bounds = BTreeSet::new();
            for tier in tiers {
                if !bounds.insert(tier.min_downstream) {
                    return Err(invalid(
                        "impact.severity_tiers",
                        &format!("duplicate min_downstream {}", tier.min_downstream),
                    ));
                }
            }
        }
        if self.ranking_limit == Some(0) {
            return Err(invalid("impact.ranking_limit", "must be at least 1"));
        }
        if let Some(rules) = &self.redundancy_rules {
            let mut seen = BTreeSet::new();
            for rule in rules {
                if rule.categories.is_empty() {
                    return Err(invalid("impact.redundancy_rules", "rule has no categories"));
                }
                if let Some(category) = rule.categories.iter().find(|c| !seen.insert(c.as_str())) {
                    return Err(invalid(
                        "impact.redundancy_rules",
                        &format!("category {category} appears in more than one rule"),
                    ));
                }
            }
        }
        Ok(())
    }
}
