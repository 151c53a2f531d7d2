//! Root-cause analysis configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{defaults, invalid, non_empty};
use crate::errors::ConfigError;
use crate::models::{AssetStatus, EdgeType};

/// Configuration for upstream root-cause search.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RootCauseConfig {
    /// Upstream hop bound. Default: 3.
    pub max_hops: Option<usize>,
    /// Statuses that mark an upstream node as a failure candidate.
    pub failure_statuses: Option<BTreeSet<AssetStatus>>,
    /// Dependency edge types followed upstream.
    pub edge_types: Option<BTreeSet<EdgeType>>,
}

impl RootCauseConfig {
    /// Returns the effective hop bound, defaulting to 3.
    pub fn effective_max_hops(&self) -> usize {
        self.max_hops.unwrap_or(defaults::DEFAULT_ROOT_CAUSE_MAX_HOPS)
    }

    pub fn effective_failure_statuses(&self) -> BTreeSet<AssetStatus> {
        self.failure_statuses.clone().unwrap_or_else(|| {
            defaults::DEFAULT_ROOT_CAUSE_FAILURE_STATUSES
                .iter()
                .copied()
                .collect()
        })
    }

    pub fn effective_edge_types(&self) -> BTreeSet<EdgeType> {
        self.edge_types
            .clone()
            .unwrap_or_else(|| defaults::DEFAULT_ROOT_CAUSE_EDGE_TYPES.iter().copied().collect())
    }

    /// Reject a zero hop bound and empty status or edge sets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.effective_max_hops() == 0 {
            return Err(invalid("root_cause.max_hops", "must be at least 1"));
        }
        non_empty(&self.failure_statuses, "root_cause.failure_statuses")?;
        non_empty(&self.edge_types, "root_cause.edge_types")
    }
}
