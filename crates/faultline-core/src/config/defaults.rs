// Single source of truth for all default values.

use crate::models::{AssetStatus, EdgeType, Severity};

// --- Root cause ---
pub const DEFAULT_ROOT_CAUSE_MAX_HOPS: usize = 3;
pub const DEFAULT_ROOT_CAUSE_FAILURE_STATUSES: &[AssetStatus] = &[
    AssetStatus::Offline,
    AssetStatus::Error,
    AssetStatus::Failed,
    AssetStatus::Unreachable,
    AssetStatus::Degraded,
    AssetStatus::Warning,
];
pub const DEFAULT_ROOT_CAUSE_EDGE_TYPES: &[EdgeType] = &[
    EdgeType::Powers,
    EdgeType::ConnectsTo,
    EdgeType::FeedsData,
    EdgeType::DependsOn,
];

// --- Impact ---
pub const DEFAULT_IMPACT_MAX_HOPS: usize = 5;
pub const DEFAULT_IMPACT_EDGE_TYPES: &[EdgeType] = &[
    EdgeType::Powers,
    EdgeType::ConnectsTo,
    EdgeType::FeedsData,
    EdgeType::DependsOn,
    EdgeType::Controls,
];
pub const DEFAULT_AFFECTED_STATUSES: &[AssetStatus] = &[
    AssetStatus::Offline,
    AssetStatus::Error,
    AssetStatus::Failed,
    AssetStatus::Unreachable,
    AssetStatus::Degraded,
    AssetStatus::Warning,
];
pub const DEFAULT_CASCADE_SOURCE_STATUSES: &[AssetStatus] =
    &[AssetStatus::Offline, AssetStatus::Error, AssetStatus::Failed];
/// (minimum downstream count, severity), most severe first.
pub const DEFAULT_SEVERITY_TIERS: &[(usize, Severity)] = &[
    (11, Severity::Critical),
    (6, Severity::High),
    (3, Severity::Medium),
    (0, Severity::Low),
];
pub const DEFAULT_SPOF_THRESHOLD: usize = 4;
pub const DEFAULT_SCOPED_CASCADE_MAX_HOPS: usize = 3;
pub const DEFAULT_REDUNDANCY_FALLBACK: &str = "Consider redundancy for {count} dependent systems";

// --- Drift ---
pub const DEFAULT_DRIFT_FAILURE_STATUSES: &[AssetStatus] =
    &[AssetStatus::Offline, AssetStatus::Error, AssetStatus::Failed];
pub const DEFAULT_COMPOUND_HIGH_THRESHOLD: usize = 2;
pub const DEFAULT_UNKNOWN_SENTINEL: &str = "unknown";
